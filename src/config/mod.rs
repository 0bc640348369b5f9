// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for number formatting
//!
//! This module provides the options that control [`format_number_with`]:
//! how many fractional digits to keep, whether to render a plain number or a
//! percentage, and whether tiny positive values collapse to `<0.0001`.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use unitmath::FormatOptions;
//!
//! // 3 fractional digits, plain number, no small-value rounding
//! let options = FormatOptions::default();
//! assert_eq!(options.decimals, 3);
//! ```
//!
//! # Example: Custom options
//!
//! ```rust
//! use unitmath::{format_number_with, FormatOptionsBuilder, NumberStyle};
//!
//! let options = FormatOptionsBuilder::new()
//!     .decimals(1)
//!     .style(NumberStyle::Percent)
//!     .build();
//! assert_eq!(format_number_with(0.1234, &options), "12.3%");
//! ```
//!
//! [`format_number_with`]: crate::format_number_with

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseError;

pub mod constants;

use constants::DEFAULT_DECIMALS;

/// Output style of a formatted number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberStyle {
    /// Plain decimal number
    #[default]
    Number,
    /// Percentage: the value is multiplied by 100 and suffixed with `%`
    Percent,
}

impl FromStr for NumberStyle {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "number" => Ok(NumberStyle::Number),
            "percent" => Ok(NumberStyle::Percent),
            _ => Err(ParseError::invalid_number(s, "expected \"number\" or \"percent\"")),
        }
    }
}

impl std::fmt::Display for NumberStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumberStyle::Number => f.write_str("number"),
            NumberStyle::Percent => f.write_str("percent"),
        }
    }
}

/// Options for compact number formatting
///
/// Use [`FormatOptionsBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Maximum number of fractional digits
    /// Default: 3 (values between 0 and 1 get extra digits for leading zeros)
    pub decimals: u32,

    /// Plain number or percentage
    /// Default: [`NumberStyle::Number`]
    pub style: NumberStyle,

    /// Render positive values below 0.0001 as `<0.0001`
    /// Default: false
    pub round_small: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
            style: NumberStyle::Number,
            round_small: false,
        }
    }
}

impl FormatOptions {
    /// Percentage options with default precision
    ///
    /// # Example
    ///
    /// ```rust
    /// use unitmath::{format_number_with, FormatOptions};
    ///
    /// assert_eq!(format_number_with(0.5, &FormatOptions::percent()), "50%");
    /// ```
    pub fn percent() -> Self {
        Self {
            style: NumberStyle::Percent,
            ..Self::default()
        }
    }
}

/// Builder for [`FormatOptions`]
///
/// # Example
///
/// ```rust
/// use unitmath::FormatOptionsBuilder;
///
/// let options = FormatOptionsBuilder::new()
///     .decimals(2)
///     .round_small(true)
///     .build();
/// assert_eq!(options.decimals, 2);
/// assert!(options.round_small);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormatOptionsBuilder {
    options: FormatOptions,
}

impl FormatOptionsBuilder {
    /// Create a new builder with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of fractional digits
    pub fn decimals(mut self, decimals: u32) -> Self {
        self.options.decimals = decimals;
        self
    }

    /// Set the output style
    pub fn style(mut self, style: NumberStyle) -> Self {
        self.options.style = style;
        self
    }

    /// Collapse tiny positive values to `<0.0001`
    pub fn round_small(mut self, round_small: bool) -> Self {
        self.options.round_small = round_small;
        self
    }

    /// Build the options
    pub fn build(self) -> FormatOptions {
        self.options
    }
}
