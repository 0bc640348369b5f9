// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Conversion between human-decimal notation and scaled integers
//!
//! [`parse_units`] and [`format_units`] are the arbitrary-scale pair every
//! named-unit helper is built from. Both directions use integer arithmetic
//! only, so for any decimal string `s` with at most `scale` fractional digits
//! `format_units(&parse_units(s, scale)?, scale)` is `s` in canonical form.
//!
//! # Examples
//!
//! ```
//! use unitmath::{ether, format_ether, format_usdc, usdc};
//!
//! let amount = ether("1.25").unwrap();
//! assert_eq!(amount.raw().to_string(), "1250000000000000000");
//! assert_eq!(format_ether(&amount), "1.25");
//!
//! let stable = usdc(1_000u64).unwrap();
//! assert_eq!(format_usdc(&stable), "1000");
//! ```

use alloy_primitives::{I256, U256};

use crate::{ParseError, Scale, ScaledAmount, Unit};

/// Input accepted by the parsing functions
///
/// Numeric inputs are rendered to their canonical decimal string before
/// parsing, so a float never contributes binary rounding noise beyond its
/// own shortest representation.
#[derive(Debug, Clone, PartialEq)]
pub enum AmountInput {
    /// A decimal string such as `"12.5"`
    Decimal(String),
    /// A whole number
    Integer(I256),
    /// A float, rendered with its shortest round-trip representation
    Float(f64),
    /// An amount that is already scaled; rescaled exactly to the target scale
    Amount(ScaledAmount),
}

impl AmountInput {
    /// Render the input as a plain decimal string
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NonFinite`] for NaN or infinite floats.
    pub fn to_decimal_string(&self) -> Result<String, ParseError> {
        match self {
            AmountInput::Decimal(s) => Ok(s.clone()),
            AmountInput::Integer(i) => Ok(i.to_string()),
            AmountInput::Float(f) if f.is_finite() => Ok(f.to_string()),
            AmountInput::Float(f) => Err(ParseError::non_finite(*f)),
            AmountInput::Amount(a) => Ok(a.to_string()),
        }
    }
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        AmountInput::Decimal(value.to_string())
    }
}

impl From<String> for AmountInput {
    fn from(value: String) -> Self {
        AmountInput::Decimal(value)
    }
}

impl From<&String> for AmountInput {
    fn from(value: &String) -> Self {
        AmountInput::Decimal(value.clone())
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for AmountInput {
                fn from(value: $t) -> Self {
                    AmountInput::Decimal(value.to_string())
                }
            }
        )*
    };
}

impl_from_integer!(i32, i64, i128, u32, u64, u128, U256);

impl From<I256> for AmountInput {
    fn from(value: I256) -> Self {
        AmountInput::Integer(value)
    }
}

impl From<f64> for AmountInput {
    fn from(value: f64) -> Self {
        AmountInput::Float(value)
    }
}

impl From<ScaledAmount> for AmountInput {
    fn from(value: ScaledAmount) -> Self {
        AmountInput::Amount(value)
    }
}

impl From<&ScaledAmount> for AmountInput {
    fn from(value: &ScaledAmount) -> Self {
        AmountInput::Amount(*value)
    }
}

/// Parse a value into a [`ScaledAmount`] at an arbitrary scale
///
/// # Errors
///
/// Returns [`ParseError`] if the input is not a valid decimal numeral, is a
/// non-finite float, or does not fit in 256 bits at `scale`. A
/// [`ScaledAmount`] input whose digits would not survive a lower `scale` is
/// a [`ParseError::PrecisionLoss`]; truncating is explicit through
/// [`ScaledAmount::rescale`].
///
/// # Examples
///
/// ```
/// use unitmath::parse_units;
///
/// let amount = parse_units("0.001", 15u32).unwrap();
/// assert_eq!(amount.raw().to_string(), "1000000000000");
///
/// let from_float = parse_units(0.1, 18u32).unwrap();
/// assert_eq!(from_float.raw().to_string(), "100000000000000000");
/// ```
pub fn parse_units(
    input: impl Into<AmountInput>,
    scale: impl Into<Scale>,
) -> Result<ScaledAmount, ParseError> {
    let scale = scale.into();
    match input.into() {
        AmountInput::Amount(amount) => rescale_exact(amount, scale),
        other => ScaledAmount::from_decimal_str(&other.to_decimal_string()?, scale),
    }
}

/// Re-express an already-scaled amount without dropping digits
fn rescale_exact(amount: ScaledAmount, scale: Scale) -> Result<ScaledAmount, ParseError> {
    let rescaled = amount
        .rescale(scale)
        .map_err(|_| ParseError::overflow(amount.to_string()))?;
    if scale < amount.scale() && rescaled.rescale(amount.scale()) != Ok(amount) {
        return Err(ParseError::precision_loss(amount, amount.scale(), scale));
    }
    Ok(rescaled)
}

/// Format an amount with at most `scale` fractional digits
///
/// See [`ScaledAmount::to_decimal_string`] for the canonical form.
pub fn format_units(amount: &ScaledAmount, scale: impl Into<Scale>) -> String {
    amount.to_decimal_string(scale)
}

/// Format a raw integer interpreted at `scale`
///
/// # Examples
///
/// ```
/// use alloy_primitives::I256;
/// use unitmath::format_raw_units;
///
/// let wei = I256::try_from(1_500_000_000_000_000_000i64).unwrap();
/// assert_eq!(format_raw_units(wei, 18u32), "1.5");
/// ```
pub fn format_raw_units(raw: I256, scale: impl Into<Scale>) -> String {
    let scale = scale.into();
    ScaledAmount::new(raw, scale).to_decimal_string(scale)
}

/// Format an amount at `scale` and read it back as an `f64`
///
/// This is a lossy conversion meant for display and charting only.
pub fn format_units_f64(amount: &ScaledAmount, scale: impl Into<Scale>) -> f64 {
    let rendered = format_units(amount, scale);
    rendered.parse::<f64>().unwrap_or_else(|e| {
        tracing::warn!(
            amount = %rendered,
            error = %e,
            "Failed to parse formatted amount to f64, using 0.0"
        );
        0.0
    })
}

/// Parse an ether value (18 decimals)
pub fn ether(input: impl Into<AmountInput>) -> Result<ScaledAmount, ParseError> {
    Unit::Ether.parse(input)
}

/// Parse a gwei value (9 decimals)
pub fn gwei(input: impl Into<AmountInput>) -> Result<ScaledAmount, ParseError> {
    Unit::Gwei.parse(input)
}

/// Parse a mwei value (6 decimals)
pub fn mwei(input: impl Into<AmountInput>) -> Result<ScaledAmount, ParseError> {
    Unit::Mwei.parse(input)
}

/// Parse a DAI value (18 decimals)
pub fn dai(input: impl Into<AmountInput>) -> Result<ScaledAmount, ParseError> {
    Unit::Dai.parse(input)
}

/// Parse a USDC value (6 decimals)
pub fn usdc(input: impl Into<AmountInput>) -> Result<ScaledAmount, ParseError> {
    Unit::Usdc.parse(input)
}

/// Parse a WBTC value (8 decimals)
pub fn wbtc(input: impl Into<AmountInput>) -> Result<ScaledAmount, ParseError> {
    Unit::Wbtc.parse(input)
}

/// Format an amount as ether (18 decimals)
pub fn format_ether(amount: &ScaledAmount) -> String {
    Unit::Ether.format(amount)
}

/// Format an amount as gwei (9 decimals)
pub fn format_gwei(amount: &ScaledAmount) -> String {
    Unit::Gwei.format(amount)
}

/// Format an amount as mwei (6 decimals)
pub fn format_mwei(amount: &ScaledAmount) -> String {
    Unit::Mwei.format(amount)
}

/// Format an amount as DAI (18 decimals)
pub fn format_dai(amount: &ScaledAmount) -> String {
    Unit::Dai.format(amount)
}

/// Format an amount as USDC (6 decimals)
pub fn format_usdc(amount: &ScaledAmount) -> String {
    Unit::Usdc.format(amount)
}

/// Format an amount as WBTC (8 decimals)
pub fn format_wbtc(amount: &ScaledAmount) -> String {
    Unit::Wbtc.format(amount)
}
