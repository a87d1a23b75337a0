//! Calculation input model.
//!
//! This module contains the [`CalculationInput`] type describing one
//! person's gross pay for a single reporting period.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayPeriod;

/// Overtime worked in one period, keyed by pay multiplier.
///
/// The key is the string form of the multiplier earned for that overtime
/// (for example `"1.5"` for time-and-a-half, `"2"` for double time) and the
/// value is the number of hours worked at that multiplier. Keys are kept as
/// strings so hosts can pass the mapping straight through from JSON; they
/// are parsed, and rejected if malformed, when the calculation runs.
pub type OvertimeBands = BTreeMap<String, Decimal>;

/// The gross pay inputs for a single take-home calculation.
///
/// All hour and rate figures are interpreted per the [`PayPeriod`] in
/// `period`, and every figure in the resulting
/// [`CalculationResult`](super::CalculationResult) is expressed in the same
/// unit. The value is immutable once constructed; a calculation never
/// mutates its input.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{CalculationInput, OvertimeBands, PayPeriod};
/// use rust_decimal::Decimal;
///
/// let mut overtime = OvertimeBands::new();
/// overtime.insert("1.5".to_string(), Decimal::from(5));
///
/// let input = CalculationInput {
///     base_rate: Decimal::from(20),
///     base_hours: Decimal::from(40),
///     overtime_bands: overtime,
///     pension_rate: 5,
///     period: PayPeriod::Week,
/// };
/// assert_eq!(input.period, PayPeriod::Week);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Basic pay per hour, in currency units.
    pub base_rate: Decimal,
    /// Regular (non-overtime) hours worked in one period.
    pub base_hours: Decimal,
    /// Overtime hours worked in one period, keyed by multiplier string.
    /// An empty map means no overtime.
    #[serde(default)]
    pub overtime_bands: OvertimeBands,
    /// Pension contribution as an integer percent of gross, 0–100.
    pub pension_rate: u8,
    /// The reporting period the hour figures (and the output) are
    /// denominated in.
    pub period: PayPeriod,
}
