// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for inputs outside a function's mathematical domain.

/// Errors raised when an input lies outside the domain of a function.
///
/// Currently only the integer square root has a restricted domain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// The square root of a negative number was requested.
    #[error("Square root of negative value {value} is undefined")]
    NegativeInput {
        /// Decimal rendering of the rejected value
        value: String,
    },
}

impl DomainError {
    /// Create a `NegativeInput` error from any displayable value.
    pub fn negative_input(value: impl std::fmt::Display) -> Self {
        DomainError::NegativeInput {
            value: value.to_string(),
        }
    }
}
