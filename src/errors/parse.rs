// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for decimal string parsing.
//!
//! This module provides the error type for the unit conversion functions,
//! which turn human-decimal notation into scaled integers.

use crate::Scale;

/// Errors that can occur while parsing a decimal amount.
///
/// Parsing is strict: the input must be a plain base-10 numeral with an
/// optional sign and at most one decimal point. Nothing is recovered locally;
/// every failure is surfaced to the caller.
///
/// # Examples
///
/// ```rust
/// use unitmath::{parse_units, ParseError};
///
/// match parse_units("1.2.3", 18u32) {
///     Err(ParseError::InvalidNumber { input, .. }) => assert_eq!(input, "1.2.3"),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input contained no digits at all.
    #[error("Cannot parse an empty decimal string")]
    Empty,

    /// The input is not a valid decimal numeral.
    ///
    /// This covers stray characters, multiple decimal points, exponents,
    /// grouping separators and surrounding whitespace.
    #[error("Invalid decimal number {input:?}: {reason}")]
    InvalidNumber {
        /// The rejected input
        input: String,
        /// Why the input was rejected
        reason: String,
    },

    /// The scaled value does not fit in a 256-bit signed integer.
    #[error("Decimal number {input:?} overflows 256 bits at the requested scale")]
    Overflow {
        /// The rejected input
        input: String,
    },

    /// A floating-point input was NaN or infinite.
    #[error("Cannot parse non-finite value {value}")]
    NonFinite {
        /// The rejected value, rendered (`NaN`, `inf`, `-inf`)
        value: String,
    },

    /// An already-scaled amount would lose digits at a lower target scale.
    ///
    /// Dropping digits is never implicit; call
    /// [`ScaledAmount::rescale`](crate::ScaledAmount::rescale) to truncate.
    #[error("Amount {amount} at {from} cannot be expressed at {to} without dropping digits")]
    PrecisionLoss {
        /// The amount that was passed in
        amount: String,
        /// Scale of the amount
        from: Scale,
        /// Requested scale
        to: Scale,
    },

    /// A unit name did not match any known unit.
    #[error("Unknown unit: {name}")]
    UnknownUnit {
        /// The unit name that was looked up
        name: String,
    },
}

impl ParseError {
    /// Create an `InvalidNumber` error.
    pub fn invalid_number(input: impl Into<String>, reason: impl Into<String>) -> Self {
        ParseError::InvalidNumber {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an `Overflow` error.
    pub fn overflow(input: impl Into<String>) -> Self {
        ParseError::Overflow {
            input: input.into(),
        }
    }

    /// Create a `NonFinite` error.
    pub fn non_finite(value: f64) -> Self {
        ParseError::NonFinite {
            value: value.to_string(),
        }
    }

    /// Create a `PrecisionLoss` error.
    pub fn precision_loss(amount: impl std::fmt::Display, from: Scale, to: Scale) -> Self {
        ParseError::PrecisionLoss {
            amount: amount.to_string(),
            from,
            to,
        }
    }

    /// Create an `UnknownUnit` error.
    pub fn unknown_unit(name: impl Into<String>) -> Self {
        ParseError::UnknownUnit { name: name.into() }
    }
}
