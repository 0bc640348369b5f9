// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Deterministic fixed-point arithmetic for token amounts.
//!
//! Amounts are scaled integers: an exact 256-bit signed integer paired with
//! a decimal scale (18 for ether, 6 for USDC, ...). Everything here is a pure
//! function over its inputs with no shared state.
//!
//! - **Unit conversion**: [`parse_units`] / [`format_units`] and the named
//!   helpers ([`ether`], [`gwei`], [`usdc`], ...) convert between decimal
//!   strings and [`ScaledAmount`]s using integer arithmetic only.
//! - **Piecewise-linear curves**: [`piecewise_evaluate`] and
//!   [`BreakpointTable`] interpolate over breakpoints in fixed point.
//! - **Integer square root**: [`isqrt`] returns the exact floor root.
//! - **Compact formatting**: [`format_number`] renders `1.235m`, `4.25%`,
//!   `<0.0001` and friends for display.
//!
//! # Example
//!
//! ```
//! use unitmath::{ether, format_ether, format_number, piecewise_evaluate};
//!
//! let xs = [ether("0").unwrap(), ether("100").unwrap()];
//! let ys = [ether("0").unwrap(), ether("1000").unwrap()];
//!
//! let y = piecewise_evaluate(&ether("50").unwrap(), &xs, &ys).unwrap();
//! assert_eq!(format_ether(&y), "500");
//! assert_eq!(format_number(y.to_f64() * 2_469.1358), "1.235m");
//! ```

pub mod config;
mod convert;
mod errors;
mod format;
mod piecewise;
mod sqrt;
mod tracing;
mod types;

pub use config::{FormatOptions, FormatOptionsBuilder, NumberStyle};
pub use convert::{
    dai, ether, format_dai, format_ether, format_gwei, format_mwei, format_raw_units,
    format_units, format_units_f64, format_usdc, format_wbtc, gwei, mwei, parse_units, usdc,
    wbtc, AmountInput,
};
pub use errors::{AmountError, ArithmeticError, DomainError, InvalidTableError, ParseError};
pub use format::{format_number, format_number_with};
pub use piecewise::{piecewise_evaluate, piecewise_evaluate_raw, BreakpointTable};
pub use sqrt::{isqrt, isqrt_u256};
pub use types::{Scale, ScaledAmount, Unit};
