//! Calculation result model.
//!
//! This module contains the [`CalculationResult`] type that captures every
//! component of a take-home calculation, all expressed in the period unit of
//! the input.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The complete breakdown of one take-home pay calculation.
///
/// Every field is denominated per the input's reporting period: a weekly
/// input yields weekly figures, a yearly input yields yearly figures. The
/// result is a fresh immutable value returned from the calculation; nothing
/// is accumulated on a long-lived object, so results from concurrent
/// calculations can never interfere.
///
/// Two consistency invariants hold by construction:
/// `total_reduction == tax + national_insurance`, and `take_home` equals the
/// annual after-pension income minus annual tax and levy, divided by the
/// period multiplier.
///
/// # Example
///
/// ```
/// use payroll_engine::models::CalculationResult;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = CalculationResult {
///     basic: Decimal::from(800),
///     overtime: Decimal::from(150),
///     pension_reduction: Decimal::from_str("47.5").unwrap(),
///     tax: Decimal::from_str("153.30").unwrap(),
///     national_insurance: Decimal::from_str("20.11").unwrap(),
///     total_reduction: Decimal::from_str("173.41").unwrap(),
///     take_home: Decimal::from_str("729.09").unwrap(),
/// };
/// assert_eq!(result.basic + result.overtime, Decimal::from(950));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Regular pay for the period: base hours × base rate.
    pub basic: Decimal,
    /// Overtime pay for the period, summed over all multiplier bands.
    pub overtime: Decimal,
    /// Pension contribution deducted for the period.
    pub pension_reduction: Decimal,
    /// Income tax deducted for the period.
    pub tax: Decimal,
    /// National insurance contribution deducted for the period.
    pub national_insurance: Decimal,
    /// Combined tax and national insurance for the period.
    pub total_reduction: Decimal,
    /// Net pay for the period after pension, tax, and national insurance.
    pub take_home: Decimal,
}
