//! Pension contribution calculation.
//!
//! Unlike tax and national insurance, the pension deduction has no banding:
//! it is a flat percentage of gross income, deducted before either of the
//! other tables is applied.

use rust_decimal::Decimal;

/// Calculates the pension contribution on an annual income.
///
/// `rate_percent` is an integer percent in 0–100; the contribution is
/// `annual_income × rate_percent / 100`. Total over any income, always ≥ 0
/// for non-negative income.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::pension;
/// use rust_decimal::Decimal;
///
/// assert_eq!(pension(Decimal::from(49_400), 5), Decimal::from(2_470));
/// assert_eq!(pension(Decimal::from(49_400), 0), Decimal::ZERO);
/// ```
pub fn pension(annual_income: Decimal, rate_percent: u8) -> Decimal {
    annual_income * Decimal::from(rate_percent) / Decimal::ONE_HUNDRED
}
