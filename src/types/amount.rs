// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Scaled integer amount type

use std::cmp::Ordering;

use alloy_primitives::I256;
use serde::{Deserialize, Serialize};

use super::scale::{pow10, Scale};
use crate::{ArithmeticError, ParseError};

/// Significant digits above which a decimal string cannot fit in an `I256`
const MAX_I256_DIGITS: usize = 77;

/// An exact signed integer paired with a decimal scale
///
/// The represented value is `raw / 10^scale`. The raw integer is always
/// exact: rounding only happens where an operation says so (truncating
/// fractional digits while parsing, or an explicit [`rescale`](Self::rescale)
/// down). Values are immutable; every operation returns a new amount.
///
/// # Examples
///
/// ```
/// use unitmath::{Scale, ScaledAmount};
///
/// // 1.5 ETH in wei (18 decimals)
/// let amount = ScaledAmount::from_decimal_str("1.5", Scale::ETHER).unwrap();
/// assert_eq!(amount.raw().to_string(), "1500000000000000000");
/// assert_eq!(amount.to_string(), "1.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaledAmount {
    raw: I256,
    scale: Scale,
}

impl ScaledAmount {
    /// Create an amount from a raw integer already expressed at `scale`
    pub const fn new(raw: I256, scale: Scale) -> Self {
        Self { raw, scale }
    }

    /// Zero at the given scale
    pub const fn zero(scale: Scale) -> Self {
        Self::new(I256::ZERO, scale)
    }

    /// Get the raw scaled integer
    pub const fn raw(&self) -> I256 {
        self.raw
    }

    /// Get the decimal scale
    pub const fn scale(&self) -> Scale {
        self.scale
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// Check if the amount is strictly negative
    pub fn is_negative(&self) -> bool {
        self.raw.is_negative()
    }

    /// Parse a base-10 string into `raw = value * 10^scale`
    ///
    /// Accepts an optional `+`/`-` sign and at most one decimal point; either
    /// side of the point may be empty (`".5"`, `"5."`) but at least one digit
    /// is required. Fractional digits beyond `scale` are truncated toward
    /// zero.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the string is not a plain decimal numeral
    /// or the scaled value does not fit in 256 bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use unitmath::{Scale, ScaledAmount};
    ///
    /// let usdc = ScaledAmount::from_decimal_str("-12.3456789", Scale::USDC).unwrap();
    /// assert_eq!(usdc.raw().to_string(), "-12345678");
    /// ```
    pub fn from_decimal_str(input: &str, scale: impl Into<Scale>) -> Result<Self, ParseError> {
        let scale = scale.into();
        if input.is_empty() {
            return Err(ParseError::Empty);
        }

        let (negative, unsigned) = match input.as_bytes()[0] {
            b'-' => (true, &input[1..]),
            b'+' => (false, &input[1..]),
            _ => (false, input),
        };

        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        if fraction.contains('.') {
            return Err(ParseError::invalid_number(input, "multiple decimal points"));
        }
        if whole.is_empty() && fraction.is_empty() {
            return Err(ParseError::invalid_number(input, "no digits"));
        }
        if let Some(c) = whole
            .chars()
            .chain(fraction.chars())
            .find(|c| !c.is_ascii_digit())
        {
            return Err(ParseError::invalid_number(
                input,
                format!("unexpected character {c:?}"),
            ));
        }

        let places = scale.as_u32() as usize;
        let kept = if fraction.len() > places {
            tracing::debug!(
                input,
                scale = places,
                dropped = fraction.len() - places,
                "Truncating fractional digits beyond scale"
            );
            &fraction[..places]
        } else {
            fraction
        };

        let body = format!("{whole}{kept}");
        let significant = body.trim_start_matches('0');
        if significant.is_empty() {
            return Ok(Self::zero(scale));
        }

        let padding = places - kept.len();
        if significant.len().saturating_add(padding) > MAX_I256_DIGITS {
            return Err(ParseError::overflow(input));
        }

        let sign = if negative { "-" } else { "" };
        let digits = format!("{sign}{significant}{}", "0".repeat(padding));
        let raw = I256::from_dec_str(&digits).map_err(|_| ParseError::overflow(input))?;

        Ok(Self::new(raw, scale))
    }

    /// Render the amount with at most `target` fractional digits
    ///
    /// Digits beyond `target` are truncated toward zero. The output is
    /// canonical: no exponent, no grouping, trailing fractional zeros trimmed,
    /// the decimal point dropped when nothing follows it, and no negative
    /// zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use alloy_primitives::I256;
    /// use unitmath::{Scale, ScaledAmount};
    ///
    /// let amount = ScaledAmount::new(I256::try_from(123_456_789i64).unwrap(), Scale::USDC);
    /// assert_eq!(amount.to_decimal_string(Scale::USDC), "123.456789");
    /// assert_eq!(amount.to_decimal_string(2u32), "123.45");
    /// assert_eq!(amount.to_decimal_string(Scale::ETHER), "123.456789");
    /// ```
    pub fn to_decimal_string(&self, target: impl Into<Scale>) -> String {
        // Padding below grows with the scale, which is unbounded for zero
        if self.raw.is_zero() {
            return "0".to_string();
        }
        let scale = self.scale.as_u32() as usize;
        // Zero-extending past the own scale only adds zeros that get trimmed
        let places = (target.into().as_u32() as usize).min(scale);
        let dropped = scale - places;

        let mut digits = self.raw.unsigned_abs().to_string();
        if digits.len() <= dropped {
            return "0".to_string();
        }
        digits.truncate(digits.len() - dropped);

        if digits.len() <= places {
            digits.insert_str(0, &"0".repeat(places + 1 - digits.len()));
        }
        let (whole, fraction) = digits.split_at(digits.len() - places);
        let fraction = fraction.trim_end_matches('0');

        let mut rendered = String::with_capacity(digits.len() + 2);
        if self.raw.is_negative() && (whole != "0" || !fraction.is_empty()) {
            rendered.push('-');
        }
        rendered.push_str(whole);
        if !fraction.is_empty() {
            rendered.push('.');
            rendered.push_str(fraction);
        }
        rendered
    }

    /// Re-express the amount at another scale
    ///
    /// Scaling up multiplies by `10^(new - old)` exactly. Scaling down
    /// divides by `10^(old - new)`, truncating toward zero, which is lossy.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::Overflow`] when scaling up does not fit in
    /// 256 bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use unitmath::{Scale, ScaledAmount};
    ///
    /// let usdc = ScaledAmount::from_decimal_str("2.5", Scale::USDC).unwrap();
    /// let wad = usdc.rescale(Scale::ETHER).unwrap();
    /// assert_eq!(wad.raw().to_string(), "2500000000000000000");
    ///
    /// let whole = usdc.rescale(0u32).unwrap();
    /// assert_eq!(whole.raw().to_string(), "2");
    /// ```
    pub fn rescale(&self, new_scale: impl Into<Scale>) -> Result<Self, ArithmeticError> {
        let new_scale = new_scale.into();
        let old = self.scale.as_u32();
        let new = new_scale.as_u32();

        match new.cmp(&old) {
            Ordering::Equal => Ok(*self),
            Ordering::Greater => {
                if self.raw.is_zero() {
                    return Ok(Self::zero(new_scale));
                }
                let raw = pow10(new - old)
                    .and_then(|factor| self.raw.checked_mul(factor))
                    .ok_or_else(|| ArithmeticError::overflow("rescale"))?;
                Ok(Self::new(raw, new_scale))
            }
            Ordering::Less => {
                // Every I256 is below 10^77, so larger divisors leave zero
                let Some(factor) = pow10(old - new) else {
                    return Ok(Self::zero(new_scale));
                };
                if !(self.raw % factor).is_zero() {
                    tracing::debug!(
                        amount = %self,
                        from_scale = old,
                        to_scale = new,
                        "Rescaling down discards fractional digits"
                    );
                }
                Ok(Self::new(self.raw / factor, new_scale))
            }
        }
    }

    /// Convert to `f64` for display purposes
    ///
    /// This is a lossy conversion and must not feed back into arithmetic.
    ///
    /// # Examples
    ///
    /// ```
    /// use unitmath::{Scale, ScaledAmount};
    ///
    /// let amount = ScaledAmount::from_decimal_str("0.001", Scale::ETHER).unwrap();
    /// assert!((amount.to_f64() - 0.001).abs() < 1e-12);
    /// ```
    pub fn to_f64(&self) -> f64 {
        let rendered = self.to_decimal_string(self.scale);
        rendered.parse::<f64>().unwrap_or_else(|e| {
            tracing::warn!(
                amount = %rendered,
                error = %e,
                "Failed to parse scaled amount to f64, using 0.0"
            );
            0.0
        })
    }
}

impl std::fmt::Display for ScaledAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_decimal_string(self.scale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(value: i64) -> I256 {
        I256::try_from(value).unwrap()
    }

    #[test]
    fn test_parse_whole_and_fraction() {
        let amount = ScaledAmount::from_decimal_str("1.5", Scale::ETHER).unwrap();
        assert_eq!(amount.raw(), int(1_500_000_000_000_000_000));
        assert_eq!(amount.scale(), Scale::ETHER);
    }

    #[test]
    fn test_parse_signs() {
        let negative = ScaledAmount::from_decimal_str("-0.25", Scale::USDC).unwrap();
        assert_eq!(negative.raw(), int(-250_000));
        assert!(negative.is_negative());

        let positive = ScaledAmount::from_decimal_str("+0.25", Scale::USDC).unwrap();
        assert_eq!(positive.raw(), int(250_000));

        let negative_zero = ScaledAmount::from_decimal_str("-0.000", Scale::USDC).unwrap();
        assert!(negative_zero.is_zero());
        assert!(!negative_zero.is_negative());
    }

    #[test]
    fn test_parse_empty_sides_of_point() {
        let leading = ScaledAmount::from_decimal_str(".5", Scale::WBTC).unwrap();
        assert_eq!(leading.raw(), int(50_000_000));

        let trailing = ScaledAmount::from_decimal_str("5.", Scale::WBTC).unwrap();
        assert_eq!(trailing.raw(), int(500_000_000));
    }

    #[test]
    fn test_parse_truncates_extra_fraction_digits() {
        let amount = ScaledAmount::from_decimal_str("1.23456789", Scale::USDC).unwrap();
        assert_eq!(amount.raw(), int(1_234_567));

        let negative = ScaledAmount::from_decimal_str("-1.9999999", Scale::USDC).unwrap();
        assert_eq!(negative.raw(), int(-1_999_999));

        let whole = ScaledAmount::from_decimal_str("7.99", 0u32).unwrap();
        assert_eq!(whole.raw(), int(7));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert_eq!(
            ScaledAmount::from_decimal_str("", Scale::ETHER),
            Err(ParseError::Empty)
        );
        for input in ["-", "+", ".", "-.", "1.2.3", "1e18", "1,000", " 1", "1 ", "0x10", "--1", "abc"] {
            let result = ScaledAmount::from_decimal_str(input, Scale::ETHER);
            assert!(
                matches!(result, Err(ParseError::InvalidNumber { .. })),
                "expected {input:?} to be rejected, got {result:?}"
            );
        }
    }

    #[test]
    fn test_parse_overflow() {
        let huge = "9".repeat(60);
        assert_eq!(
            ScaledAmount::from_decimal_str(&huge, Scale::ETHER),
            Err(ParseError::overflow(huge.clone()))
        );
        assert!(ScaledAmount::from_decimal_str(&huge, 0u32).is_ok());
    }

    #[test]
    fn test_zero_renders_without_padding_at_any_scale() {
        let zero = ScaledAmount::zero(Scale::new(u32::MAX));
        assert_eq!(zero.to_decimal_string(u32::MAX), "0");
        assert_eq!(zero.to_string(), "0");
        assert_eq!(zero.to_f64(), 0.0);

        let parsed = ScaledAmount::from_decimal_str("-0.000", u32::MAX).unwrap();
        assert_eq!(parsed.to_decimal_string(Scale::ETHER), "0");
    }

    #[test]
    fn test_parse_large_scale() {
        let zero = ScaledAmount::from_decimal_str("0.0", u32::MAX).unwrap();
        assert!(zero.is_zero());

        let tiny = ScaledAmount::from_decimal_str("0.00001", 80u32).unwrap();
        assert_eq!(tiny.raw(), pow10(75).unwrap());

        assert!(matches!(
            ScaledAmount::from_decimal_str("1", 80u32),
            Err(ParseError::Overflow { .. })
        ));
    }

    #[test]
    fn test_parse_leading_zeros() {
        let amount = ScaledAmount::from_decimal_str("000123.4500", Scale::USDC).unwrap();
        assert_eq!(amount.raw(), int(123_450_000));
    }

    #[test]
    fn test_to_decimal_string_canonical() {
        let cases = [
            (0i64, 18u32, "0"),
            (1_000_000_000_000_000_000, 18, "1"),
            (1_500_000_000_000_000_000, 18, "1.5"),
            (-250_000, 6, "-0.25"),
            (1, 18, "0.000000000000000001"),
            (123, 0, "123"),
            (100_000_000, 8, "1"),
        ];
        for (raw, scale, expected) in cases {
            let amount = ScaledAmount::new(int(raw), Scale::new(scale));
            assert_eq!(amount.to_decimal_string(scale), expected, "raw {raw} at {scale}");
        }
    }

    #[test]
    fn test_to_decimal_string_truncates_to_target() {
        let amount = ScaledAmount::new(int(-1_999_999), Scale::USDC);
        assert_eq!(amount.to_decimal_string(3u32), "-1.999");
        assert_eq!(amount.to_decimal_string(0u32), "-1");

        // Truncated to zero: no negative zero
        let small = ScaledAmount::new(int(-5), Scale::USDC);
        assert_eq!(small.to_decimal_string(2u32), "0");
    }

    #[test]
    fn test_to_decimal_string_extends_target() {
        let amount = ScaledAmount::new(int(15), 1u32.into());
        assert_eq!(amount.to_decimal_string(Scale::ETHER), "1.5");
    }

    #[test]
    fn test_rescale_up_and_down() {
        let amount = ScaledAmount::new(int(2_500_000), Scale::USDC);

        let up = amount.rescale(Scale::ETHER).unwrap();
        assert_eq!(up.raw(), int(2_500_000_000_000_000_000));
        assert_eq!(up.scale(), Scale::ETHER);

        let down = amount.rescale(0u32).unwrap();
        assert_eq!(down.raw(), int(2));

        let negative = ScaledAmount::new(int(-2_500_000), Scale::USDC);
        assert_eq!(negative.rescale(0u32).unwrap().raw(), int(-2));

        assert_eq!(amount.rescale(Scale::USDC).unwrap(), amount);
    }

    #[test]
    fn test_rescale_overflow() {
        let amount = ScaledAmount::new(int(1), 0u32.into());
        assert_eq!(
            amount.rescale(77u32),
            Err(ArithmeticError::overflow("rescale"))
        );
        assert!(amount.rescale(76u32).is_ok());

        let big = ScaledAmount::new(pow10(70).unwrap(), 0u32.into());
        assert!(big.rescale(Scale::ETHER).is_err());

        let zero = ScaledAmount::zero(0u32.into());
        assert!(zero.rescale(1000u32).unwrap().is_zero());
    }

    #[test]
    fn test_rescale_far_down_is_zero() {
        let amount = ScaledAmount::new(I256::MAX, 200u32.into());
        let down = amount.rescale(0u32).unwrap();
        assert!(down.is_zero());
    }

    #[test]
    fn test_to_f64() {
        let amount = ScaledAmount::new(int(1_500_000_000_000_000_000), Scale::ETHER);
        assert_eq!(amount.to_f64(), 1.5);

        let negative = ScaledAmount::new(int(-250_000), Scale::USDC);
        assert_eq!(negative.to_f64(), -0.25);
    }

    #[test]
    fn test_display_formatting() {
        let amount = ScaledAmount::new(int(12_345), 2u32.into());
        assert_eq!(format!("{}", amount), "123.45");
    }

    #[test]
    fn test_serialization() {
        let amount = ScaledAmount::new(int(-12_345), Scale::USDC);
        let json = serde_json::to_string(&amount).unwrap();
        let deserialized: ScaledAmount = serde_json::from_str(&json).unwrap();
        assert_eq!(amount, deserialized);
    }
}
