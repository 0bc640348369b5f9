// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for fixed-width integer arithmetic.

/// Errors from checked 256-bit arithmetic.
///
/// Amounts are backed by `I256`, so a product or power of ten can exceed the
/// representable range. This is reported instead of wrapping.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    /// An intermediate or final result does not fit in 256 bits.
    #[error("Arithmetic overflow during {operation}")]
    Overflow {
        /// Name of the operation that overflowed
        operation: &'static str,
    },
}

impl ArithmeticError {
    /// Create an `Overflow` error.
    pub fn overflow(operation: &'static str) -> Self {
        ArithmeticError::Overflow { operation }
    }
}
