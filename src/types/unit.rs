// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Named units with fixed decimal scales

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::amount::ScaledAmount;
use super::scale::Scale;
use crate::convert::{format_units, parse_units, AmountInput};
use crate::ParseError;

/// A named unit with a fixed decimal scale
///
/// | Unit  | Scale |
/// |-------|-------|
/// | ether | 18    |
/// | gwei  | 9     |
/// | mwei  | 6     |
/// | dai   | 18    |
/// | usdc  | 6     |
/// | wbtc  | 8     |
///
/// # Examples
///
/// ```
/// use unitmath::{Scale, Unit};
///
/// let unit: Unit = "USDC".parse().unwrap();
/// assert_eq!(unit, Unit::Usdc);
/// assert_eq!(unit.scale(), Scale::USDC);
///
/// let amount = unit.parse("100.25").unwrap();
/// assert_eq!(amount.raw().to_string(), "100250000");
/// assert_eq!(unit.format(&amount), "100.25");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Native ether, 18 decimals
    Ether,
    /// Gwei, 9 decimals (gas prices)
    Gwei,
    /// Mwei, 6 decimals
    Mwei,
    /// DAI stablecoin, 18 decimals
    Dai,
    /// USDC stablecoin, 6 decimals
    Usdc,
    /// Wrapped bitcoin, 8 decimals
    Wbtc,
}

impl Unit {
    /// Every named unit
    pub const ALL: [Unit; 6] = [
        Unit::Ether,
        Unit::Gwei,
        Unit::Mwei,
        Unit::Dai,
        Unit::Usdc,
        Unit::Wbtc,
    ];

    /// Get the decimal scale of the unit
    pub const fn scale(self) -> Scale {
        match self {
            Unit::Ether => Scale::ETHER,
            Unit::Gwei => Scale::GWEI,
            Unit::Mwei => Scale::MWEI,
            Unit::Dai => Scale::DAI,
            Unit::Usdc => Scale::USDC,
            Unit::Wbtc => Scale::WBTC,
        }
    }

    /// Get the lower-case name of the unit
    pub const fn name(self) -> &'static str {
        match self {
            Unit::Ether => "ether",
            Unit::Gwei => "gwei",
            Unit::Mwei => "mwei",
            Unit::Dai => "dai",
            Unit::Usdc => "usdc",
            Unit::Wbtc => "wbtc",
        }
    }

    /// Parse a value expressed in this unit
    pub fn parse(self, input: impl Into<AmountInput>) -> Result<ScaledAmount, ParseError> {
        parse_units(input, self.scale())
    }

    /// Format an amount with this unit's precision
    pub fn format(self, amount: &ScaledAmount) -> String {
        format_units(amount, self.scale())
    }
}

impl FromStr for Unit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::ALL
            .into_iter()
            .find(|unit| unit.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::unknown_unit(s))
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
