// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for unitmath operations.
//!
//! Telemetry concerns are kept out of the arithmetic: instead of
//! `#[instrument]` attributes, each instrumented operation has a span helper
//! here.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub fn my_operation(param: Type) -> Result<T> {
//!     let span = spans::my_operation(param_value);
//!     let _guard = span.enter();
//!     // Arithmetic here
//! }
//! ```
//!
//! These operations are cheap and frequent, so spans are `trace` or `debug`
//! level and are disabled by typical `info` filters.

use alloy_primitives::U256;
use tracing::Span;

use crate::NumberStyle;

/// Create span for evaluating a piecewise-linear breakpoint table.
///
/// Parent: caller's span
/// Children: none
#[inline]
pub(crate) fn piecewise_evaluate(breakpoints: usize) -> Span {
    tracing::trace_span!("unitmath.piecewise_evaluate", breakpoints = breakpoints)
}

/// Create span for the Newton iteration of the integer square root.
///
/// Only entered on the big-integer slow path; the float fast path emits a
/// single trace event instead.
#[inline]
pub(crate) fn isqrt_newton(value: U256) -> Span {
    tracing::debug_span!(
        "unitmath.isqrt_newton",
        value = %value,
        bits = value.bit_len(),
    )
}

/// Create span for compact number formatting.
#[inline]
pub(crate) fn format_number(style: NumberStyle, decimals: u32) -> Span {
    tracing::trace_span!(
        "unitmath.format_number",
        style = %style,
        decimals = decimals,
    )
}
