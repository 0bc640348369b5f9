// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Numeric constants
//!
//! This module centralizes the magic numbers used throughout the unitmath
//! crate: fixed-point precision factors, float safety limits, and the
//! compact formatter's thresholds and suffixes.

use alloy_primitives::{I256, U256};

/// Largest power of ten representable in an `I256` (`10^76 < 2^255 < 10^77`)
pub const MAX_POW10: u32 = 76;

/// Fixed-point precision factor used by the piecewise evaluator (`10^9`)
///
/// The offset into a segment is multiplied by this factor before dividing by
/// the segment width, so the fractional position survives integer division.
/// Outputs depend on its exact magnitude.
pub const INTERPOLATION_PRECISION: I256 =
    I256::from_raw(U256::from_limbs([1_000_000_000, 0, 0, 0]));

/// Largest integer an `f64` represents exactly together with all smaller
/// integers (`2^53 - 1`)
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Formatter inputs above this are displayed as infinity
pub const OVERFLOW_THRESHOLD: f64 = 1e20;

/// Positive values below this collapse to [`SMALL_NUMBER_LABEL`] when rounding is requested
pub const SMALL_NUMBER_THRESHOLD: f64 = 0.0001;

/// Label shown for positive values below [`SMALL_NUMBER_THRESHOLD`]
pub const SMALL_NUMBER_LABEL: &str = "<0.0001";

/// Default maximum number of fractional digits for formatted numbers
pub const DEFAULT_DECIMALS: u32 = 3;

/// Upper bound on fractional digits after the small-number adjustment
pub const MAX_FRACTION_DIGITS: u32 = 100;

/// Digits inspected when counting leading fractional zeros
pub const LEADING_ZERO_SCAN_DIGITS: usize = 20;

/// Symbol rendered for infinite values
pub const INFINITY_SYMBOL: &str = "∞";

/// Compact notation suffixes as `(power of ten, suffix)`, largest first
///
/// Thousand, million and billion are lower-cased; trillion keeps its
/// upper-case `T`.
pub const COMPACT_SUFFIXES: [(u32, &str); 4] = [(12, "T"), (9, "b"), (6, "m"), (3, "k")];
