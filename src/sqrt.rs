// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Floor integer square root
//!
//! Small inputs take a float fast path; everything else runs Newton's
//! method on 256-bit integers.

use alloy_primitives::{I256, U256};

use crate::config::constants::MAX_SAFE_INTEGER;
use crate::tracing::spans;
use crate::DomainError;

/// Compute `floor(sqrt(value))`
///
/// # Errors
///
/// Returns [`DomainError::NegativeInput`] if `value` is negative.
///
/// # Examples
///
/// ```
/// use alloy_primitives::I256;
/// use unitmath::isqrt;
///
/// let n = |v: i64| I256::try_from(v).unwrap();
/// assert_eq!(isqrt(n(0)).unwrap(), n(0));
/// assert_eq!(isqrt(n(2)).unwrap(), n(1));
/// assert_eq!(isqrt(n(1_000_000)).unwrap(), n(1_000));
/// assert!(isqrt(n(-1)).is_err());
/// ```
pub fn isqrt(value: I256) -> Result<I256, DomainError> {
    if value.is_negative() {
        return Err(DomainError::negative_input(value));
    }
    // The root of anything below 2^255 is below 2^128, so it stays positive
    Ok(I256::from_raw(isqrt_u256(value.unsigned_abs())))
}

/// Compute `floor(sqrt(value))` for an unsigned 256-bit integer
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use unitmath::isqrt_u256;
///
/// let root = isqrt_u256(U256::from(10u64).pow(U256::from(30u64)));
/// assert_eq!(root, U256::from(10u64).pow(U256::from(15u64)));
/// ```
pub fn isqrt_u256(value: U256) -> U256 {
    if value < U256::from(MAX_SAFE_INTEGER) {
        let small: u64 = value.to::<u64>();
        tracing::trace!(value = small, "isqrt float fast path");
        return U256::from(isqrt_small(small));
    }

    let span = spans::isqrt_newton(value);
    let _guard = span.enter();

    let two = U256::from(2u64);
    // (value + 1) / 2 without overflowing at U256::MAX
    let mut current = value / two + value % two;
    let mut previous = value;
    let mut iterations = 0u32;
    while current < previous {
        previous = current;
        current = (value / current + current) / two;
        iterations += 1;
    }
    tracing::trace!(iterations, "isqrt converged");

    // Newton on integers decreases monotonically; the last decreasing iterate is the floor
    previous
}

/// Float square root corrected to the exact floor
///
/// `f64::sqrt` is correctly rounded, so near `k^2 - 1` for large `k` it can
/// round up to `k`. One integer step in either direction fixes that.
fn isqrt_small(value: u64) -> u64 {
    let mut root = (value as f64).sqrt().floor() as u64;
    let n = u128::from(value);
    while u128::from(root) * u128::from(root) > n {
        root -= 1;
    }
    while u128::from(root + 1) * u128::from(root + 1) <= n {
        root += 1;
    }
    root
}
