// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Compact human-readable number formatting
//!
//! Produces the short strings shown next to token balances and rates:
//! `1.235m`, `12.5k`, `0.00000123`, `42%`, `<0.0001`, `∞`.
//!
//! Rules, in order:
//!
//! 1. Values above `1e20` are treated as infinity.
//! 2. With `round_small`, positive values below `0.0001` render as `<0.0001`.
//! 3. For plain numbers strictly between 0 and 1, every leading zero of the
//!    fractional part adds one extra fractional digit, so small values keep
//!    their significant digits.
//! 4. The value is compacted with `k`/`m`/`b`/`T` suffixes and rounded half
//!    away from zero to the fractional digit limit, trailing zeros trimmed.
//!    Percentages are multiplied by 100 and suffixed with `%`.
//!
//! Rounding happens on the shortest decimal representation of the float,
//! in exact decimal arithmetic, so `1.0005` rounds to `1.001` rather than
//! being perturbed by its binary expansion.

use std::str::FromStr;

use bigdecimal::num_bigint::BigInt;
use bigdecimal::BigDecimal;

use crate::config::constants::{
    COMPACT_SUFFIXES, INFINITY_SYMBOL, LEADING_ZERO_SCAN_DIGITS, MAX_FRACTION_DIGITS,
    OVERFLOW_THRESHOLD, SMALL_NUMBER_LABEL, SMALL_NUMBER_THRESHOLD,
};
use crate::tracing::spans;
use crate::{FormatOptions, NumberStyle};

/// Format a number with the default options
///
/// Equivalent to [`format_number_with`] with [`FormatOptions::default`]:
/// three fractional digits, plain number, no small-value rounding.
///
/// # Examples
///
/// ```
/// use unitmath::format_number;
///
/// assert_eq!(format_number(1_234_567.0), "1.235m");
/// assert_eq!(format_number(0.00000123), "0.00000123");
/// assert_eq!(format_number(1e21), "∞");
/// ```
pub fn format_number(num: f64) -> String {
    format_number_with(num, &FormatOptions::default())
}

/// Format a number with explicit options
///
/// Never fails: non-finite and overflowing inputs degrade to the infinity
/// symbol (or `NaN`).
///
/// # Examples
///
/// ```
/// use unitmath::{format_number_with, FormatOptionsBuilder, NumberStyle};
///
/// let small = FormatOptionsBuilder::new().round_small(true).build();
/// assert_eq!(format_number_with(0.00005, &small), "<0.0001");
///
/// let percent = FormatOptionsBuilder::new().style(NumberStyle::Percent).build();
/// assert_eq!(format_number_with(0.0425, &percent), "4.25%");
/// ```
pub fn format_number_with(num: f64, options: &FormatOptions) -> String {
    let span = spans::format_number(options.style, options.decimals);
    let _guard = span.enter();

    let num = if num > OVERFLOW_THRESHOLD {
        tracing::trace!(num, "Value above overflow threshold, rendering as infinity");
        f64::INFINITY
    } else {
        num
    };

    if options.round_small && num > 0.0 && num < SMALL_NUMBER_THRESHOLD {
        return SMALL_NUMBER_LABEL.to_string();
    }

    let mut decimals = options.decimals;
    if options.style == NumberStyle::Number && num > 0.0 && num < 1.0 {
        decimals = decimals.saturating_add(leading_fraction_zeros(num));
    }
    let decimals = decimals.min(MAX_FRACTION_DIGITS);

    let unit = match options.style {
        NumberStyle::Number => "",
        NumberStyle::Percent => "%",
    };
    if num.is_nan() {
        return format!("NaN{unit}");
    }
    let sign = if num.is_sign_negative() { "-" } else { "" };
    if num.is_infinite() {
        return format!("{sign}{INFINITY_SYMBOL}{unit}");
    }

    // Display for f64 is the shortest round-trip form and never uses exponents
    let shortest = num.abs().to_string();
    let mut magnitude = match BigDecimal::from_str(&shortest) {
        Ok(magnitude) => magnitude,
        Err(e) => {
            tracing::warn!(num, error = %e, "Failed to convert float to decimal, using plain rendering");
            return num.to_string();
        }
    };
    if options.style == NumberStyle::Percent {
        magnitude = magnitude * BigDecimal::from(100);
    }

    format!("{sign}{}{unit}", compact(&magnitude, decimals))
}

/// Count the zeros between the decimal point and the first non-zero digit
fn leading_fraction_zeros(num: f64) -> u32 {
    let fixed = format!("{:.*}", LEADING_ZERO_SCAN_DIGITS, num);
    let fraction = fixed.split_once('.').map_or("", |(_, fraction)| fraction);
    fraction.bytes().take_while(|b| *b == b'0').count() as u32
}

/// Render a non-negative decimal with a compact suffix
fn compact(magnitude: &BigDecimal, decimals: u32) -> String {
    let mut index = COMPACT_SUFFIXES
        .iter()
        .position(|(exponent, _)| *magnitude >= power_of_ten(i64::from(*exponent)));

    loop {
        let (exponent, suffix) = index.map_or((0, ""), |i| COMPACT_SUFFIXES[i]);
        let scaled = magnitude * power_of_ten(-i64::from(exponent));
        let digits = round_half_up(&scaled, decimals);

        let split = digits.len() - decimals as usize;
        let (whole, fraction) = digits.split_at(split);

        // Rounding up to 1000 of a unit moves to the next suffix: 999999.9996 -> 1m
        let larger = match index {
            Some(0) => None,
            Some(i) => Some(i - 1),
            None => Some(COMPACT_SUFFIXES.len() - 1),
        };
        if whole.len() > 3 {
            if let Some(next) = larger {
                index = Some(next);
                continue;
            }
        }

        let fraction = fraction.trim_end_matches('0');
        let mut rendered = group_thousands(whole);
        if !fraction.is_empty() {
            rendered.push('.');
            rendered.push_str(fraction);
        }
        rendered.push_str(suffix);
        return rendered;
    }
}

/// `10^exponent` as an exact decimal
fn power_of_ten(exponent: i64) -> BigDecimal {
    BigDecimal::new(BigInt::from(1), -exponent)
}

/// Digits of `round(value * 10^decimals)`, half away from zero, left-padded
/// so that at least one integer digit precedes the last `decimals` digits
fn round_half_up(value: &BigDecimal, decimals: u32) -> String {
    let half = BigDecimal::new(BigInt::from(5), 1);
    let shifted = value * power_of_ten(i64::from(decimals)) + half;
    let (rounded, _) = shifted.with_scale(0).into_bigint_and_exponent();

    let digits = rounded.to_string();
    let width = decimals as usize + 1;
    if digits.len() < width {
        format!("{digits:0>width$}")
    } else {
        digits
    }
}

/// Insert `,` separators, but only once the integer part has five or more
/// digits (`1000T` stays ungrouped, `12,345T` is grouped)
fn group_thousands(whole: &str) -> String {
    if whole.len() < 5 {
        return whole.to_string();
    }
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
