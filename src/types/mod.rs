// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for scaled amounts.
//!
//! # Type Relationships
//!
//! ```text
//! &str / integer / f64
//!     |
//!     | parse_units(Scale) or Unit::parse
//!     ↓
//! ScaledAmount (I256 raw + Scale)
//!     |
//!     | format_units(Scale) or Unit::format
//!     ↓
//! canonical decimal String
//! ```

mod amount;
mod scale;
mod unit;

pub use amount::ScaledAmount;
pub use scale::Scale;
pub use unit::Unit;
