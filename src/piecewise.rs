// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Piecewise-linear evaluation over breakpoint tables
//!
//! A breakpoint table is two equal-length columns `xs` and `ys` with
//! non-decreasing `xs`. Evaluation clamps outside the table and interpolates
//! linearly inside it, entirely in 256-bit integer arithmetic.
//!
//! The fractional position inside a segment is computed as
//! `(value - xs[i]) * P / (xs[i+1] - xs[i])` with
//! `P = `[`INTERPOLATION_PRECISION`]` = 10^9`, and the result as
//! `ys[i] + pct * (ys[i+1] - ys[i]) / P`. Both divisions truncate toward
//! zero. Without the `P` factor the position would collapse to zero for any
//! segment wider than the offset.
//!
//! # Examples
//!
//! ```
//! use alloy_primitives::I256;
//! use unitmath::piecewise_evaluate_raw;
//!
//! let n = |v: i64| I256::try_from(v).unwrap();
//! let xs = [n(0), n(10), n(20)];
//! let ys = [n(0), n(5), n(25)];
//!
//! assert_eq!(piecewise_evaluate_raw(n(15), &xs, &ys).unwrap(), n(15));
//! assert_eq!(piecewise_evaluate_raw(n(-3), &xs, &ys).unwrap(), n(0));
//! assert_eq!(piecewise_evaluate_raw(n(99), &xs, &ys).unwrap(), n(25));
//! ```

use alloy_primitives::I256;

use crate::config::constants::INTERPOLATION_PRECISION;
use crate::tracing::spans;
use crate::{AmountError, ArithmeticError, InvalidTableError, Scale, ScaledAmount};

/// A validated breakpoint table
///
/// Validation happens once in the constructor, so a table can be evaluated
/// repeatedly without re-checking its shape.
///
/// # Examples
///
/// ```
/// use unitmath::{ether, usdc, BreakpointTable};
///
/// // Utilization (18 decimals) to borrow rate (6 decimals)
/// let table = BreakpointTable::new(
///     vec![ether("0").unwrap(), ether("0.8").unwrap(), ether("1").unwrap()],
///     vec![usdc("0").unwrap(), usdc("0.04").unwrap(), usdc("1").unwrap()],
/// )
/// .unwrap();
///
/// let rate = table.evaluate(&ether("0.4").unwrap()).unwrap();
/// assert_eq!(rate.to_string(), "0.02");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakpointTable {
    xs: Vec<I256>,
    ys: Vec<I256>,
    x_scale: Scale,
    y_scale: Scale,
}

impl BreakpointTable {
    /// Build a table from scaled columns
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTableError`] if the columns differ in length, are
    /// empty, mix scales within a column, or have decreasing x values.
    pub fn new(xs: Vec<ScaledAmount>, ys: Vec<ScaledAmount>) -> Result<Self, InvalidTableError> {
        check_shape(xs.len(), ys.len())?;
        let x_scale = common_scale("xs", &xs)?;
        let y_scale = common_scale("ys", &ys)?;

        Self::from_raw(
            xs.iter().map(ScaledAmount::raw).collect(),
            ys.iter().map(ScaledAmount::raw).collect(),
            x_scale,
            y_scale,
        )
    }

    /// Build a table from raw integer columns with explicit scales
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTableError`] if the columns differ in length, are
    /// empty, or have decreasing x values.
    pub fn from_raw(
        xs: Vec<I256>,
        ys: Vec<I256>,
        x_scale: Scale,
        y_scale: Scale,
    ) -> Result<Self, InvalidTableError> {
        validate(&xs, &ys)?;
        Ok(Self {
            xs,
            ys,
            x_scale,
            y_scale,
        })
    }

    /// Evaluate the curve at `value`
    ///
    /// The result carries the y column's scale.
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::InvalidTable`] if `value` is not at the x
    /// column's scale, or [`AmountError::Arithmetic`] if an intermediate
    /// product overflows 256 bits.
    pub fn evaluate(&self, value: &ScaledAmount) -> Result<ScaledAmount, AmountError> {
        if value.scale() != self.x_scale {
            return Err(
                InvalidTableError::scale_mismatch("value", self.x_scale, value.scale()).into(),
            );
        }
        let raw = self.evaluate_raw(value.raw())?;
        Ok(ScaledAmount::new(raw, self.y_scale))
    }

    /// Evaluate the curve at a raw value expressed at the x column's scale
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::Overflow`] if an intermediate product
    /// overflows 256 bits.
    pub fn evaluate_raw(&self, value: I256) -> Result<I256, ArithmeticError> {
        let span = spans::piecewise_evaluate(self.xs.len());
        let _guard = span.enter();
        interpolate(value, &self.xs, &self.ys)
    }

    /// Number of breakpoints
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always `false`: a valid table has at least one breakpoint
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Raw x column
    pub fn xs(&self) -> &[I256] {
        &self.xs
    }

    /// Raw y column
    pub fn ys(&self) -> &[I256] {
        &self.ys
    }

    /// Scale of the x column (and of evaluated values)
    pub fn x_scale(&self) -> Scale {
        self.x_scale
    }

    /// Scale of the y column (and of results)
    pub fn y_scale(&self) -> Scale {
        self.y_scale
    }
}

/// Evaluate a piecewise-linear function given as scaled breakpoints
///
/// `value` and every `xs[i]` must share one scale, and every `ys[i]` must
/// share one scale; the result is at the `ys` scale. The columns are
/// validated in place; use [`BreakpointTable`] to validate once and
/// evaluate many times.
///
/// # Errors
///
/// Returns [`AmountError::InvalidTable`] for empty, mismatched, mixed-scale
/// or decreasing tables, and [`AmountError::Arithmetic`] on overflow.
pub fn piecewise_evaluate(
    value: &ScaledAmount,
    xs: &[ScaledAmount],
    ys: &[ScaledAmount],
) -> Result<ScaledAmount, AmountError> {
    check_shape(xs.len(), ys.len())?;
    let x_scale = common_scale("xs", xs)?;
    let y_scale = common_scale("ys", ys)?;
    check_sorted(xs)?;
    if value.scale() != x_scale {
        return Err(InvalidTableError::scale_mismatch("value", x_scale, value.scale()).into());
    }

    let span = spans::piecewise_evaluate(xs.len());
    let _guard = span.enter();
    let raw = interpolate(value.raw(), xs, ys)?;
    Ok(ScaledAmount::new(raw, y_scale))
}

/// Evaluate a piecewise-linear function over raw integer breakpoints
///
/// All values are taken to be at matching scales.
///
/// # Errors
///
/// Returns [`AmountError::InvalidTable`] for empty, mismatched or decreasing
/// tables, and [`AmountError::Arithmetic`] on overflow.
pub fn piecewise_evaluate_raw(value: I256, xs: &[I256], ys: &[I256]) -> Result<I256, AmountError> {
    validate(xs, ys)?;
    let span = spans::piecewise_evaluate(xs.len());
    let _guard = span.enter();
    Ok(interpolate(value, xs, ys)?)
}

/// A column entry with a raw fixed-point value
trait Breakpoint {
    fn raw_value(&self) -> I256;
}

impl Breakpoint for I256 {
    fn raw_value(&self) -> I256 {
        *self
    }
}

impl Breakpoint for ScaledAmount {
    fn raw_value(&self) -> I256 {
        self.raw()
    }
}

fn check_shape(xs: usize, ys: usize) -> Result<(), InvalidTableError> {
    if xs != ys {
        return Err(InvalidTableError::length_mismatch(xs, ys));
    }
    if xs == 0 {
        return Err(InvalidTableError::Empty);
    }
    Ok(())
}

fn common_scale(column: &'static str, values: &[ScaledAmount]) -> Result<Scale, InvalidTableError> {
    let expected = values[0].scale();
    match values.iter().find(|v| v.scale() != expected) {
        Some(v) => Err(InvalidTableError::scale_mismatch(column, expected, v.scale())),
        None => Ok(expected),
    }
}

fn check_sorted<T: Breakpoint>(xs: &[T]) -> Result<(), InvalidTableError> {
    // Equal neighbours are allowed; they act as a step
    match xs
        .windows(2)
        .position(|pair| pair[1].raw_value() < pair[0].raw_value())
    {
        Some(i) => Err(InvalidTableError::unsorted(i + 1)),
        None => Ok(()),
    }
}

fn validate(xs: &[I256], ys: &[I256]) -> Result<(), InvalidTableError> {
    check_shape(xs.len(), ys.len())?;
    check_sorted(xs)
}

/// Clamp-or-interpolate over a validated table
fn interpolate<T: Breakpoint>(value: I256, xs: &[T], ys: &[T]) -> Result<I256, ArithmeticError> {
    let last = xs.len() - 1;
    if value >= xs[last].raw_value() {
        return Ok(ys[last].raw_value());
    }
    if value <= xs[0].raw_value() {
        return Ok(ys[0].raw_value());
    }

    // xs[0] < value < xs[last], so 1 <= upper <= last and the segment is non-empty
    let upper = xs.partition_point(|x| x.raw_value() <= value);
    let lower = upper - 1;
    let (x0, x1) = (xs[lower].raw_value(), xs[upper].raw_value());
    let (y0, y1) = (ys[lower].raw_value(), ys[upper].raw_value());

    let overflow = || ArithmeticError::overflow("piecewise interpolation");
    let offset = value.checked_sub(x0).ok_or_else(overflow)?;
    let width = x1.checked_sub(x0).ok_or_else(overflow)?;
    let rise = y1.checked_sub(y0).ok_or_else(overflow)?;

    let pct = offset
        .checked_mul(INTERPOLATION_PRECISION)
        .and_then(|scaled| scaled.checked_div(width))
        .ok_or_else(overflow)?;

    pct.checked_mul(rise)
        .and_then(|scaled| scaled.checked_div(INTERPOLATION_PRECISION))
        .and_then(|step| step.checked_add(y0))
        .ok_or_else(overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(value: i64) -> I256 {
        I256::try_from(value).unwrap()
    }

    fn column(values: &[i64]) -> Vec<I256> {
        values.iter().copied().map(n).collect()
    }

    #[test]
    fn test_midpoint_single_segment() {
        let xs = column(&[0, 100]);
        let ys = column(&[0, 1000]);
        assert_eq!(piecewise_evaluate_raw(n(50), &xs, &ys).unwrap(), n(500));
    }

    #[test]
    fn test_second_segment() {
        let xs = column(&[0, 10, 20]);
        let ys = column(&[0, 5, 25]);
        assert_eq!(piecewise_evaluate_raw(n(15), &xs, &ys).unwrap(), n(15));
    }

    #[test]
    fn test_exact_breakpoints() {
        let xs = column(&[0, 10, 20]);
        let ys = column(&[0, 5, 25]);
        assert_eq!(piecewise_evaluate_raw(n(0), &xs, &ys).unwrap(), n(0));
        assert_eq!(piecewise_evaluate_raw(n(10), &xs, &ys).unwrap(), n(5));
        assert_eq!(piecewise_evaluate_raw(n(20), &xs, &ys).unwrap(), n(25));
    }

    #[test]
    fn test_clamps_outside_table() {
        let xs = column(&[10, 20]);
        let ys = column(&[7, 9]);
        assert_eq!(piecewise_evaluate_raw(n(-1_000), &xs, &ys).unwrap(), n(7));
        assert_eq!(piecewise_evaluate_raw(n(1_000), &xs, &ys).unwrap(), n(9));
    }

    #[test]
    fn test_single_breakpoint_returns_its_y() {
        let xs = column(&[42]);
        let ys = column(&[-3]);
        for value in [-100, 41, 42, 43, 100] {
            assert_eq!(piecewise_evaluate_raw(n(value), &xs, &ys).unwrap(), n(-3));
        }
    }

    #[test]
    fn test_decreasing_segment() {
        let xs = column(&[0, 100]);
        let ys = column(&[1000, 0]);
        assert_eq!(piecewise_evaluate_raw(n(25), &xs, &ys).unwrap(), n(750));
    }

    #[test]
    fn test_truncation_matches_fixed_point() {
        // pct = 1 * 1e9 / 3 = 333333333; 333333333 * 10 / 1e9 = 3 (truncated)
        let xs = column(&[0, 3]);
        let ys = column(&[0, 10]);
        assert_eq!(piecewise_evaluate_raw(n(1), &xs, &ys).unwrap(), n(3));

        // Negative steps truncate toward zero: 333333333 * -10 / 1e9 = -3
        let ys = column(&[10, 0]);
        assert_eq!(piecewise_evaluate_raw(n(1), &xs, &ys).unwrap(), n(7));
    }

    #[test]
    fn test_precision_floor_on_huge_segments() {
        // Offsets below width / 1e9 contribute nothing
        let xs = column(&[0, 10_000_000_000]);
        let ys = column(&[0, 10_000_000_000]);
        assert_eq!(piecewise_evaluate_raw(n(9), &xs, &ys).unwrap(), n(0));
        assert_eq!(piecewise_evaluate_raw(n(10), &xs, &ys).unwrap(), n(10));
    }

    #[test]
    fn test_duplicate_x_acts_as_step() {
        let xs = column(&[0, 10, 10, 20]);
        let ys = column(&[0, 10, 100, 200]);
        assert_eq!(piecewise_evaluate_raw(n(5), &xs, &ys).unwrap(), n(5));
        assert_eq!(piecewise_evaluate_raw(n(10), &xs, &ys).unwrap(), n(100));
        assert_eq!(piecewise_evaluate_raw(n(15), &xs, &ys).unwrap(), n(150));
    }

    #[test]
    fn test_invalid_tables() {
        assert_eq!(
            piecewise_evaluate_raw(n(0), &[], &[]),
            Err(AmountError::InvalidTable(InvalidTableError::Empty))
        );
        assert_eq!(
            piecewise_evaluate_raw(n(0), &column(&[0, 1]), &column(&[0])),
            Err(AmountError::InvalidTable(InvalidTableError::length_mismatch(2, 1)))
        );
        assert_eq!(
            piecewise_evaluate_raw(n(0), &column(&[0, 5, 3]), &column(&[0, 1, 2])),
            Err(AmountError::InvalidTable(InvalidTableError::unsorted(2)))
        );
    }

    #[test]
    fn test_overflow_reported() {
        let xs = vec![I256::ZERO, I256::MAX];
        let ys = vec![I256::ZERO, I256::MAX];
        let value = I256::MAX / n(2);
        assert!(matches!(
            piecewise_evaluate_raw(value, &xs, &ys),
            Err(AmountError::Arithmetic(ArithmeticError::Overflow { .. }))
        ));
    }

    #[test]
    fn test_scaled_evaluation_carries_y_scale() {
        let xs = vec![
            ScaledAmount::new(n(0), Scale::ETHER),
            ScaledAmount::new(n(1_000_000_000_000_000_000), Scale::ETHER),
        ];
        let ys = vec![
            ScaledAmount::new(n(0), Scale::USDC),
            ScaledAmount::new(n(2_000_000), Scale::USDC),
        ];
        let value = ScaledAmount::new(n(250_000_000_000_000_000), Scale::ETHER);

        let result = piecewise_evaluate(&value, &xs, &ys).unwrap();
        assert_eq!(result, ScaledAmount::new(n(500_000), Scale::USDC));
    }

    #[test]
    fn test_scale_mismatches() {
        let xs = vec![
            ScaledAmount::new(n(0), Scale::ETHER),
            ScaledAmount::new(n(1), Scale::USDC),
        ];
        let ys = vec![ScaledAmount::new(n(0), Scale::USDC); 2];
        assert_eq!(
            BreakpointTable::new(xs, ys.clone()),
            Err(InvalidTableError::scale_mismatch("xs", Scale::ETHER, Scale::USDC))
        );

        let table = BreakpointTable::new(ys.clone(), ys).unwrap();
        let value = ScaledAmount::new(n(0), Scale::ETHER);
        assert_eq!(
            table.evaluate(&value),
            Err(AmountError::InvalidTable(InvalidTableError::scale_mismatch(
                "value",
                Scale::USDC,
                Scale::ETHER
            )))
        );
    }

    #[test]
    fn test_scaled_free_function_validates_in_place() {
        let at = |v: i64| ScaledAmount::new(n(v), Scale::GWEI);
        let xs = [at(0), at(10), at(20)];
        let ys = [at(0), at(5), at(25)];

        let table = BreakpointTable::new(xs.to_vec(), ys.to_vec()).unwrap();
        for v in [-5, 0, 7, 15, 20, 30] {
            assert_eq!(piecewise_evaluate(&at(v), &xs, &ys), table.evaluate(&at(v)));
        }

        let unsorted = [at(0), at(20), at(10)];
        assert_eq!(
            piecewise_evaluate(&at(5), &unsorted, &ys),
            Err(AmountError::InvalidTable(InvalidTableError::unsorted(2)))
        );
        assert_eq!(
            piecewise_evaluate(&ScaledAmount::new(n(5), Scale::ETHER), &xs, &ys),
            Err(AmountError::InvalidTable(InvalidTableError::scale_mismatch(
                "value",
                Scale::GWEI,
                Scale::ETHER
            )))
        );
    }

    #[test]
    fn test_table_accessors() {
        let table =
            BreakpointTable::from_raw(column(&[0, 1]), column(&[2, 3]), Scale::ETHER, Scale::GWEI)
                .unwrap();
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
        assert_eq!(table.xs(), column(&[0, 1]).as_slice());
        assert_eq!(table.ys(), column(&[2, 3]).as_slice());
        assert_eq!(table.x_scale(), Scale::ETHER);
        assert_eq!(table.y_scale(), Scale::GWEI);
    }
}
