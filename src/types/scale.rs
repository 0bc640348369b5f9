// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Decimal scale type

use alloy_primitives::{I256, U256};
use serde::{Deserialize, Serialize};

use crate::config::constants::MAX_POW10;

/// Number of implied decimal places of a scaled integer
///
/// A raw integer `r` at scale `s` represents the real value `r / 10^s`.
/// Most ERC-20 tokens use 18 decimals (like ETH), but some use different
/// values:
/// - USDC: 6 decimals
/// - WBTC: 8 decimals
/// - Gwei: 9 decimals
///
/// # Examples
///
/// ```
/// use unitmath::Scale;
///
/// let ether = Scale::ETHER;
/// assert_eq!(ether.as_u32(), 18);
///
/// let usdc = Scale::USDC;
/// assert_eq!(usdc.as_u32(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scale(u32);

impl Scale {
    /// Integer values (no fractional digits)
    pub const INTEGER: Self = Self(0);

    /// Ether and other 18-decimal native tokens
    pub const ETHER: Self = Self(18);

    /// Gwei (9 decimals)
    pub const GWEI: Self = Self(9);

    /// Mwei (6 decimals)
    pub const MWEI: Self = Self(6);

    /// DAI decimals (18)
    pub const DAI: Self = Self(18);

    /// USDC decimals (6)
    pub const USDC: Self = Self(6);

    /// WBTC decimals (8)
    pub const WBTC: Self = Self(8);

    /// Create a new scale
    pub const fn new(decimals: u32) -> Self {
        Self(decimals)
    }

    /// Get the inner u32 value
    pub const fn as_u32(&self) -> u32 {
        self.0
    }

    /// Calculate the scaling factor `10^scale`
    ///
    /// Returns `None` when the factor does not fit in an `I256`
    /// (scales above 76).
    ///
    /// # Examples
    ///
    /// ```
    /// use unitmath::Scale;
    ///
    /// assert_eq!(Scale::USDC.factor().unwrap().to_string(), "1000000");
    /// assert!(Scale::new(77).factor().is_none());
    /// ```
    pub fn factor(&self) -> Option<I256> {
        pow10(self.0)
    }
}

/// `10^exp` as an `I256`, or `None` above `10^76`
pub(crate) fn pow10(exp: u32) -> Option<I256> {
    if exp > MAX_POW10 {
        return None;
    }
    let ten = I256::from_raw(U256::from(10u64));
    (0..exp).try_fold(I256::ONE, |acc, _| acc.checked_mul(ten))
}

impl From<u32> for Scale {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<u8> for Scale {
    fn from(value: u8) -> Self {
        Self(u32::from(value))
    }
}

impl std::fmt::Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} decimals", self.0)
    }
}
