// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for breakpoint tables.
//!
//! Breakpoint tables feed the piecewise-linear evaluator. A malformed table
//! is a caller bug, so it is rejected up front rather than producing a
//! wrong segment lookup.

use crate::Scale;

/// Errors that can occur when validating a breakpoint table.
///
/// # Examples
///
/// ```rust
/// use alloy_primitives::I256;
/// use unitmath::{piecewise_evaluate_raw, InvalidTableError};
///
/// let xs = [I256::ZERO, I256::ONE];
/// let ys = [I256::ZERO];
/// let err = piecewise_evaluate_raw(I256::ZERO, &xs, &ys).unwrap_err();
/// assert!(err.to_string().contains("2 x values but 1 y values"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidTableError {
    /// The table has no breakpoints.
    #[error("Breakpoint table is empty")]
    Empty,

    /// `xs` and `ys` have different lengths.
    #[error("Breakpoint table has {xs} x values but {ys} y values")]
    LengthMismatch {
        /// Number of x values
        xs: usize,
        /// Number of y values
        ys: usize,
    },

    /// `xs[index]` is smaller than `xs[index - 1]`.
    #[error("Breakpoint x values decrease at index {index}")]
    Unsorted {
        /// First index at which the x values decrease
        index: usize,
    },

    /// A value does not share the scale of the rest of its column.
    #[error("Breakpoint table mixes scales: expected {expected}, found {found} in {column}")]
    ScaleMismatch {
        /// Which column (or the evaluated value) had the wrong scale
        column: &'static str,
        /// The scale the column was expected to have
        expected: Scale,
        /// The scale that was found
        found: Scale,
    },
}

impl InvalidTableError {
    /// Create a `LengthMismatch` error.
    pub fn length_mismatch(xs: usize, ys: usize) -> Self {
        InvalidTableError::LengthMismatch { xs, ys }
    }

    /// Create an `Unsorted` error.
    pub fn unsorted(index: usize) -> Self {
        InvalidTableError::Unsorted { index }
    }

    /// Create a `ScaleMismatch` error.
    pub fn scale_mismatch(column: &'static str, expected: Scale, found: Scale) -> Self {
        InvalidTableError::ScaleMismatch {
            column,
            expected,
            found,
        }
    }
}
