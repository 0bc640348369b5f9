// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for unitmath integration tests
//!
//! Provides shorthand constructors and opt-in log output so failing cases
//! can be inspected with `RUST_LOG=unitmath=trace cargo test`.

use alloy_primitives::I256;
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber driven by `RUST_LOG`
///
/// Safe to call from every test; only the first call installs anything.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Helper to build an `I256` from an `i64`
#[allow(dead_code)]
pub fn int(value: i64) -> I256 {
    I256::try_from(value).unwrap()
}

/// Helper to build a column of `I256` values
#[allow(dead_code)]
pub fn column(values: &[i64]) -> Vec<I256> {
    values.iter().copied().map(int).collect()
}
