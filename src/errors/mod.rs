// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the unitmath library.
//!
//! This module follows a hybrid approach:
//!
//! - **Concern-specific errors** for fine-grained handling ([`ParseError`],
//!   [`DomainError`], [`InvalidTableError`], [`ArithmeticError`])
//! - **Unified error type** ([`AmountError`]) for callers that chain several
//!   operations with `?` and don't need to distinguish the source
//!
//! Every error is a caller-input problem surfaced synchronously. Nothing is
//! retried and nothing is swallowed.
//!
//! # Examples
//!
//! ```rust
//! use alloy_primitives::I256;
//! use unitmath::{isqrt, parse_units, AmountError};
//!
//! fn root_of(input: &str) -> Result<I256, AmountError> {
//!     let amount = parse_units(input, 0u32)?;
//!     Ok(isqrt(amount.raw())?)
//! }
//!
//! assert_eq!(root_of("144").unwrap(), I256::try_from(12i64).unwrap());
//! assert!(matches!(root_of("-4"), Err(AmountError::Domain(_))));
//! assert!(matches!(root_of("abc"), Err(AmountError::Parse(_))));
//! ```

mod arithmetic;
mod domain;
mod parse;
mod table;

pub use arithmetic::ArithmeticError;
pub use domain::DomainError;
pub use parse::ParseError;
pub use table::InvalidTableError;

/// Unified error type for all unitmath operations.
///
/// All concern-specific error types convert into `AmountError` via `From`
/// implementations, so `?` propagates them naturally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    /// Malformed decimal input.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Input outside a function's domain.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Malformed breakpoint table.
    #[error("Invalid table: {0}")]
    InvalidTable(#[from] InvalidTableError),

    /// 256-bit arithmetic overflow.
    #[error("Arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Scale;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::invalid_number("1e5", "exponent notation is not supported");
        assert_eq!(
            err.to_string(),
            "Invalid decimal number \"1e5\": exponent notation is not supported"
        );
    }

    #[test]
    fn test_non_finite_error_compares_by_rendered_value() {
        let err = ParseError::non_finite(f64::NAN);
        assert_eq!(err, ParseError::non_finite(f64::NAN));
        assert_ne!(err, ParseError::non_finite(f64::INFINITY));
        assert_eq!(err.to_string(), "Cannot parse non-finite value NaN");

        let unified: AmountError = ParseError::non_finite(f64::NEG_INFINITY).into();
        assert_eq!(
            unified,
            AmountError::Parse(ParseError::NonFinite {
                value: "-inf".to_string()
            })
        );
    }

    #[test]
    fn test_precision_loss_display() {
        let err = ParseError::precision_loss("12.345678", Scale::USDC, Scale::new(2));
        assert_eq!(
            err.to_string(),
            "Amount 12.345678 at 6 decimals cannot be expressed at 2 decimals without dropping digits"
        );
    }

    #[test]
    fn test_domain_error_display() {
        let err = DomainError::negative_input(-1);
        assert_eq!(err.to_string(), "Square root of negative value -1 is undefined");
    }

    #[test]
    fn test_table_error_display() {
        assert_eq!(
            InvalidTableError::unsorted(3).to_string(),
            "Breakpoint x values decrease at index 3"
        );
        assert_eq!(
            InvalidTableError::scale_mismatch("xs", Scale::new(18), Scale::new(6)).to_string(),
            "Breakpoint table mixes scales: expected 18 decimals, found 6 decimals in xs"
        );
    }

    #[test]
    fn test_unified_error_from_conversions() {
        let err: AmountError = ParseError::Empty.into();
        assert!(matches!(err, AmountError::Parse(ParseError::Empty)));

        let err: AmountError = ArithmeticError::overflow("rescale").into();
        assert_eq!(
            err.to_string(),
            "Arithmetic error: Arithmetic overflow during rescale"
        );

        let err: AmountError = InvalidTableError::Empty.into();
        assert_eq!(err.to_string(), "Invalid table: Breakpoint table is empty");
    }
}
