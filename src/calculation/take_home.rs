//! Take-home pay orchestration.
//!
//! This module ties the band functions together: per-period gross is
//! annualized, pension is deducted, tax and national insurance are assessed
//! on the after-pension income, and everything is de-annualized back to the
//! requested period.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculation::{calculate_overtime_pay, national_insurance, pension, tax_reduction};
use crate::error::EngineResult;
use crate::models::{CalculationInput, CalculationResult, OvertimeBands, PayPeriod};

/// Computes take-home pay for a single set of gross-pay inputs.
///
/// The calculator owns its input and exposes one operation,
/// [`calculate`](PayrollCalculator::calculate), which is pure: it reads the
/// input, returns a fresh [`CalculationResult`], and leaves no state behind,
/// so a calculator can be reused and calls with independent inputs are
/// trivially parallel-safe.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::PayrollCalculator;
/// use payroll_engine::models::OvertimeBands;
/// use rust_decimal::Decimal;
///
/// let mut overtime = OvertimeBands::new();
/// overtime.insert("1.5".to_string(), Decimal::from(5));
///
/// let calculator = PayrollCalculator::from_parts(
///     Decimal::from(20),
///     Decimal::from(40),
///     overtime,
///     5,
///     "week",
/// )
/// .unwrap();
///
/// let result = calculator.calculate().unwrap();
/// assert_eq!(result.basic, Decimal::from(800));
/// assert_eq!(result.overtime, Decimal::from(150));
/// ```
#[derive(Debug, Clone)]
pub struct PayrollCalculator {
    input: CalculationInput,
}

impl PayrollCalculator {
    /// Creates a calculator for a prepared input.
    pub fn new(input: CalculationInput) -> Self {
        Self { input }
    }

    /// Creates a calculator from the five raw inputs, parsing the period
    /// name eagerly.
    ///
    /// Fails with [`EngineError::InvalidInput`](crate::error::EngineError)
    /// if `period` is not one of `"week"`, `"month"`, or `"year"`.
    pub fn from_parts(
        base_rate: Decimal,
        base_hours: Decimal,
        overtime_bands: OvertimeBands,
        pension_rate: u8,
        period: &str,
    ) -> EngineResult<Self> {
        let period: PayPeriod = period.parse()?;
        Ok(Self::new(CalculationInput {
            base_rate,
            base_hours,
            overtime_bands,
            pension_rate,
            period,
        }))
    }

    /// Returns the input this calculator was built from.
    pub fn input(&self) -> &CalculationInput {
        &self.input
    }

    /// Calculates the take-home breakdown for the input.
    ///
    /// Steps:
    /// 1. `basic = base_hours × base_rate`; overtime is summed over the
    ///    multiplier bands and kept separate from `basic`.
    /// 2. Period gross is annualized via
    ///    [`PayPeriod::periods_per_year`].
    /// 3. Pension is deducted from annual gross; tax and national insurance
    ///    are both assessed on the after-pension annual income.
    /// 4. Every deduction and the net figure are divided back down to the
    ///    input's period.
    ///
    /// Fails with [`EngineError::InvalidInput`](crate::error::EngineError)
    /// if any overtime multiplier key does not parse to a non-negative
    /// number. All arithmetic is total.
    pub fn calculate(&self) -> EngineResult<CalculationResult> {
        let input = &self.input;

        let basic = input.base_hours * input.base_rate;
        let overtime = calculate_overtime_pay(&input.overtime_bands, input.base_rate)?;
        let period_gross = basic + overtime;

        let multiplier = input.period.periods_per_year();
        let annual_gross = period_gross * multiplier;

        let annual_pension = pension(annual_gross, input.pension_rate);
        let after_pension = annual_gross - annual_pension;
        let annual_tax = tax_reduction(after_pension);
        let annual_ni = national_insurance(after_pension);

        debug!(
            period = %input.period,
            %annual_gross,
            %annual_pension,
            %annual_tax,
            %annual_ni,
            "annualized deductions assessed"
        );

        let tax = annual_tax / multiplier;
        let ni = annual_ni / multiplier;

        Ok(CalculationResult {
            basic,
            overtime,
            pension_reduction: annual_pension / multiplier,
            tax,
            national_insurance: ni,
            total_reduction: tax + ni,
            take_home: (after_pension - annual_tax - annual_ni) / multiplier,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn weekly_input() -> CalculationInput {
        let mut overtime = OvertimeBands::new();
        overtime.insert("1.5".to_string(), dec("5"));
        CalculationInput {
            base_rate: dec("20"),
            base_hours: dec("40"),
            overtime_bands: overtime,
            pension_rate: 5,
            period: PayPeriod::Week,
        }
    }

    /// TH-001: the worked weekly example, end to end
    #[test]
    fn test_weekly_example_breakdown() {
        let result = PayrollCalculator::new(weekly_input()).calculate().unwrap();

        assert_eq!(result.basic, dec("800"));
        assert_eq!(result.overtime, dec("150.0"));
        // annual gross 950 × 52 = 49,400; pension 5% = 2,470 → 47.50/week
        assert_eq!(result.pension_reduction, dec("2470.00") / dec("52"));
        // after-pension 46,930: tax (46,930 − 43,000) × 0.4 + 6,400 = 7,972
        assert_eq!(result.tax, dec("7972.0") / dec("52"));
        // ni (46,930 − 43,000) × 0.02 + 967.20 = 1,045.80
        assert_eq!(result.national_insurance, dec("1045.8") / dec("52"));
        assert_eq!(
            result.total_reduction,
            result.tax + result.national_insurance
        );
        // take-home (46,930 − 7,972 − 1,045.80) / 52
        assert_eq!(result.take_home, dec("37912.2") / dec("52"));
    }

    /// TH-002: basic stays pure regular pay; overtime is not folded in
    #[test]
    fn test_basic_excludes_overtime() {
        let result = PayrollCalculator::new(weekly_input()).calculate().unwrap();
        assert_eq!(result.basic, dec("800"));
        assert_eq!(result.basic + result.overtime, dec("950.0"));
    }

    /// TH-003: calculating twice yields identical results
    #[test]
    fn test_calculate_is_idempotent() {
        let calculator = PayrollCalculator::new(weekly_input());
        let first = calculator.calculate().unwrap();
        let second = calculator.calculate().unwrap();
        assert_eq!(first, second);
    }

    /// TH-004: yearly input skips annualization entirely
    #[test]
    fn test_yearly_input_is_identity_multiplier() {
        let input = CalculationInput {
            base_rate: dec("25"),
            base_hours: dec("1878"),
            overtime_bands: OvertimeBands::new(),
            pension_rate: 0,
            period: PayPeriod::Year,
        };

        let result = PayrollCalculator::new(input).calculate().unwrap();
        // gross 46,950, no pension
        assert_eq!(result.basic, dec("46950"));
        assert_eq!(result.tax, tax_reduction(dec("46950")));
        assert_eq!(result.national_insurance, national_insurance(dec("46950")));
    }

    /// TH-005: pension comes out before tax and ni are assessed
    #[test]
    fn test_tax_and_ni_assessed_after_pension() {
        let mut input = weekly_input();
        input.pension_rate = 100;

        let result = PayrollCalculator::new(input).calculate().unwrap();
        // All income goes to pension, so nothing is left to tax.
        assert_eq!(result.tax, Decimal::ZERO);
        assert_eq!(result.national_insurance, Decimal::ZERO);
        assert_eq!(result.take_home, Decimal::ZERO);
    }

    /// TH-006: empty overtime map yields zero overtime
    #[test]
    fn test_empty_overtime() {
        let mut input = weekly_input();
        input.overtime_bands.clear();

        let result = PayrollCalculator::new(input).calculate().unwrap();
        assert_eq!(result.overtime, Decimal::ZERO);
        assert_eq!(result.basic, dec("800"));
    }

    /// TH-007: malformed overtime key surfaces as InvalidInput
    #[test]
    fn test_malformed_overtime_key_fails() {
        let mut input = weekly_input();
        input
            .overtime_bands
            .insert("time-and-a-half".to_string(), dec("3"));

        assert!(PayrollCalculator::new(input).calculate().is_err());
    }

    /// TH-008: unknown period name fails at construction
    #[test]
    fn test_from_parts_rejects_unknown_period() {
        let result = PayrollCalculator::from_parts(
            dec("20"),
            dec("40"),
            OvertimeBands::new(),
            5,
            "fortnight",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_from_parts_parses_period() {
        let calculator =
            PayrollCalculator::from_parts(dec("20"), dec("40"), OvertimeBands::new(), 5, "month")
                .unwrap();
        assert_eq!(calculator.input().period, PayPeriod::Month);
    }

    #[test]
    fn test_zero_hours_zero_income() {
        let input = CalculationInput {
            base_rate: dec("20"),
            base_hours: Decimal::ZERO,
            overtime_bands: OvertimeBands::new(),
            pension_rate: 5,
            period: PayPeriod::Week,
        };

        let result = PayrollCalculator::new(input).calculate().unwrap();
        assert_eq!(result.basic, Decimal::ZERO);
        assert_eq!(result.take_home, Decimal::ZERO);
    }
}
