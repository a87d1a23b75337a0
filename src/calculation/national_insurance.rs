//! National insurance contribution calculation.
//!
//! This module provides the two-tier contribution levy lookup: nothing up to
//! the primary threshold, a main rate on earnings between the primary
//! threshold and the upper earnings limit, and a reduced rate above the
//! limit with a fixed carry-forward for the main-rate tier.
//!
//! The inequality directions are preserved verbatim from the source tables:
//! both tiers use strict bounds, so income of exactly 43,000 falls through
//! every guard and owes nothing, and the carry into the upper tier is the
//! literal 8,060 × 0.12 of the source rather than the main band taxed in
//! full.

use rust_decimal::Decimal;

/// Earnings at or below this owe no contributions.
pub const PRIMARY_THRESHOLD: Decimal = Decimal::from_parts(8_060, 0, 0, false, 0);

/// Earnings above this are charged at the reduced upper rate.
pub const UPPER_EARNINGS_LIMIT: Decimal = Decimal::from_parts(43_000, 0, 0, false, 0);

/// Amount carried into the upper tier: the source table's literal
/// 8,060 × 0.12.
pub const UPPER_BAND_CARRY: Decimal = Decimal::from_parts(9_672, 0, 0, false, 1); // 967.2

const MAIN_RATE: Decimal = Decimal::from_parts(12, 0, 0, false, 2); // 12%
const UPPER_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 2); // 2%

/// One contribution tier.
///
/// A tier applies when income is strictly above `floor` and strictly below
/// `ceiling` (`None` means unbounded). The amount owed is
/// `(income − floor) × rate + carry_forward`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContributionBand {
    /// Income must be strictly above this to enter the tier.
    pub floor: Decimal,
    /// Income must be strictly below this to stay in the tier; `None` for
    /// the top tier.
    pub ceiling: Option<Decimal>,
    /// The rate applied to the slice above `floor`.
    pub rate: Decimal,
    /// Fixed amount carried forward from the lower tier.
    pub carry_forward: Decimal,
}

/// The contribution tiers, in evaluation order. Income matching no tier
/// (at or below the primary threshold, or exactly at the upper earnings
/// limit) owes nothing.
pub const NI_BANDS: [ContributionBand; 2] = [
    ContributionBand {
        floor: PRIMARY_THRESHOLD,
        ceiling: Some(UPPER_EARNINGS_LIMIT),
        rate: MAIN_RATE,
        carry_forward: Decimal::ZERO,
    },
    ContributionBand {
        floor: UPPER_EARNINGS_LIMIT,
        ceiling: None,
        rate: UPPER_RATE,
        carry_forward: UPPER_BAND_CARRY,
    },
];

/// Calculates the annual national insurance contribution on an annual
/// income.
///
/// The function is total over any income and the result is always ≥ 0.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::national_insurance;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// // At or below the primary threshold nothing is owed.
/// assert_eq!(national_insurance(Decimal::from(8_060)), Decimal::ZERO);
///
/// // Main rate: 12% of the slice above 8,060.
/// assert_eq!(
///     national_insurance(Decimal::from(20_000)),
///     Decimal::from_str("1432.80").unwrap()
/// );
///
/// // Upper rate: 2% of the slice above 43,000, plus the 967.20 carry.
/// assert_eq!(
///     national_insurance(Decimal::from(46_930)),
///     Decimal::from_str("1045.8").unwrap()
/// );
/// ```
pub fn national_insurance(annual_income: Decimal) -> Decimal {
    for band in &NI_BANDS {
        let above_floor = annual_income > band.floor;
        let within_ceiling = band.ceiling.is_none_or(|c| annual_income < c);
        if above_floor && within_ceiling {
            return (annual_income - band.floor) * band.rate + band.carry_forward;
        }
    }
    Decimal::ZERO
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// NI-001: nothing owed at or below the primary threshold
    #[test]
    fn test_zero_at_or_below_primary_threshold() {
        assert_eq!(national_insurance(Decimal::ZERO), Decimal::ZERO);
        assert_eq!(national_insurance(dec("8000")), Decimal::ZERO);
        assert_eq!(national_insurance(dec("8060")), Decimal::ZERO);
    }

    /// NI-002: main rate on the slice above the threshold
    #[test]
    fn test_main_rate_tier() {
        assert_eq!(national_insurance(dec("8060.01")), dec("0.0012"));
        assert_eq!(national_insurance(dec("20000")), dec("1432.80"));
        // ceiling is exclusive, so just below the limit still pays 12%
        assert_eq!(national_insurance(dec("42999.99")), dec("4192.7988"));
    }

    /// NI-003: income of exactly 43,000 falls through every tier
    #[test]
    fn test_exactly_at_upper_limit_owes_nothing() {
        assert_eq!(national_insurance(dec("43000")), Decimal::ZERO);
    }

    /// NI-004: upper rate with the literal 967.20 carry
    #[test]
    fn test_upper_rate_tier() {
        assert_eq!(national_insurance(dec("43000.01")), dec("967.2002"));
        assert_eq!(national_insurance(dec("46930")), dec("1045.8"));
        assert_eq!(national_insurance(dec("100000")), dec("2107.20"));
    }

    #[test]
    fn test_result_is_never_negative() {
        for income in ["0", "8060", "8060.01", "43000", "43000.01", "500000"] {
            assert!(national_insurance(dec(income)) >= Decimal::ZERO);
        }
    }

    #[test]
    fn test_upper_band_carry_is_source_literal() {
        // The carry is the source table's 8,060 × 0.12, not the main band
        // taxed in full.
        assert_eq!(UPPER_BAND_CARRY, PRIMARY_THRESHOLD * dec("0.12"));
        assert_ne!(
            UPPER_BAND_CARRY,
            (UPPER_EARNINGS_LIMIT - PRIMARY_THRESHOLD) * dec("0.12")
        );
    }
}
