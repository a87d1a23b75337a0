//! Progressive income-tax band calculation.
//!
//! This module provides the income-tax lookup over an explicit, ordered band
//! table. Each band taxes only the slice of income above its offset at a
//! single marginal rate, with the tax owed on the lower bands carried
//! forward as a fixed addend.
//!
//! ## Band structure
//!
//! | Annual income | Marginal rate | Carry-forward |
//! |---|---|---|
//! | ≤ 11,000 | 0% | — |
//! | 11,000 – 43,000 | 20% above 11,000 | 0 |
//! | 43,000 – 150,000 | 40% above 43,000 | 6,400 |
//! | above 150,000 | 45% above 15,000 | 434,400 |
//!
//! The figures are an opaque, versioned tax table and are preserved verbatim
//! from the published source, including two anomalies in the additional
//! band: its offset reads 15,000 where the band is only entered above
//! 150,000, and its carry-forward of 434,400 does not equal the tax actually
//! owed on the lower bands. Hosts that want the repaired figures can opt in
//! via [`CORRECTED_TAX_BANDS`] and [`tax_for_bands`].

use rust_decimal::Decimal;

/// The tax-free personal allowance; no tax is owed at or below this income.
pub const PERSONAL_ALLOWANCE: Decimal = Decimal::from_parts(11_000, 0, 0, false, 0);

/// Upper bound (inclusive) of the basic-rate band.
pub const BASIC_RATE_CEILING: Decimal = Decimal::from_parts(43_000, 0, 0, false, 0);

/// Upper bound (inclusive) of the higher-rate band.
pub const HIGHER_RATE_CEILING: Decimal = Decimal::from_parts(150_000, 0, 0, false, 0);

/// Tax carried into the higher band for income taxed at the basic rate.
/// 6,400 = 20% of the 32,000-wide basic band.
pub const HIGHER_BAND_CARRY: Decimal = Decimal::from_parts(6_400, 0, 0, false, 0);

/// Offset subtracted before applying the additional rate. Preserved
/// verbatim from the source table; see the module docs for the anomaly.
pub const ADDITIONAL_RATE_OFFSET: Decimal = Decimal::from_parts(15_000, 0, 0, false, 0);

/// Tax carried into the additional band: the 6,400 basic-band carry plus a
/// fixed 428,000. Preserved verbatim from the source table.
pub const ADDITIONAL_BAND_CARRY: Decimal = Decimal::from_parts(434_400, 0, 0, false, 0);

const BASIC_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 1); // 20%
const HIGHER_RATE: Decimal = Decimal::from_parts(4, 0, 0, false, 1); // 40%
const ADDITIONAL_RATE: Decimal = Decimal::from_parts(45, 0, 0, false, 2); // 45%

/// One contiguous income range taxed at a single marginal rate.
///
/// A band applies when income is strictly above `floor` and at or below
/// `ceiling` (`None` means unbounded). The amount owed is
/// `(income − taxable_above) × rate + carry_forward`. Keeping `taxable_above`
/// separate from `floor` lets the table express the additional band's
/// anomalous 15,000 offset without special-casing the lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxBand {
    /// Income must be strictly above this to enter the band.
    pub floor: Decimal,
    /// Income must be at or below this to stay in the band; `None` for the
    /// top band.
    pub ceiling: Option<Decimal>,
    /// The offset subtracted from income before applying the rate.
    pub taxable_above: Decimal,
    /// The marginal rate applied to the slice above `taxable_above`.
    pub rate: Decimal,
    /// Fixed tax carried forward from the lower bands.
    pub carry_forward: Decimal,
}

/// The income-tax band table, in evaluation order, preserved verbatim from
/// the published source including its known anomalies.
pub const TAX_BANDS: [TaxBand; 4] = [
    TaxBand {
        floor: Decimal::MIN,
        ceiling: Some(PERSONAL_ALLOWANCE),
        taxable_above: Decimal::ZERO,
        rate: Decimal::ZERO,
        carry_forward: Decimal::ZERO,
    },
    TaxBand {
        floor: PERSONAL_ALLOWANCE,
        ceiling: Some(BASIC_RATE_CEILING),
        taxable_above: PERSONAL_ALLOWANCE,
        rate: BASIC_RATE,
        carry_forward: Decimal::ZERO,
    },
    TaxBand {
        floor: BASIC_RATE_CEILING,
        ceiling: Some(HIGHER_RATE_CEILING),
        taxable_above: BASIC_RATE_CEILING,
        rate: HIGHER_RATE,
        carry_forward: HIGHER_BAND_CARRY,
    },
    TaxBand {
        floor: HIGHER_RATE_CEILING,
        ceiling: None,
        taxable_above: ADDITIONAL_RATE_OFFSET,
        rate: ADDITIONAL_RATE,
        carry_forward: ADDITIONAL_BAND_CARRY,
    },
];

/// The repaired table for hosts that explicitly opt out of the source
/// anomalies: the additional band's offset becomes 150,000 and its
/// carry-forward the 49,200 actually owed on the lower bands
/// (6,400 + 40% of the 107,000-wide higher band).
pub const CORRECTED_TAX_BANDS: [TaxBand; 4] = [
    TAX_BANDS[0],
    TAX_BANDS[1],
    TAX_BANDS[2],
    TaxBand {
        floor: HIGHER_RATE_CEILING,
        ceiling: None,
        taxable_above: HIGHER_RATE_CEILING,
        rate: ADDITIONAL_RATE,
        carry_forward: Decimal::from_parts(49_200, 0, 0, false, 0),
    },
];

/// Calculates the annual income tax owed on an annual income.
///
/// Applies the default [`TAX_BANDS`] table. The function is total over any
/// income and the result is always ≥ 0.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::tax_reduction;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// // At or below the personal allowance nothing is owed.
/// assert_eq!(tax_reduction(Decimal::from(11_000)), Decimal::ZERO);
///
/// // Basic rate: 20% of the slice above 11,000.
/// assert_eq!(
///     tax_reduction(Decimal::from(20_000)),
///     Decimal::from_str("1800.0").unwrap()
/// );
///
/// // Higher rate: 40% of the slice above 43,000, plus the 6,400 carry.
/// assert_eq!(
///     tax_reduction(Decimal::from(46_930)),
///     Decimal::from_str("7972.0").unwrap()
/// );
/// ```
pub fn tax_reduction(annual_income: Decimal) -> Decimal {
    tax_for_bands(annual_income, &TAX_BANDS)
}

/// Calculates annual income tax against an explicit band table.
///
/// Bands are evaluated in order and the first whose range contains the
/// income wins; income outside every band owes nothing. Exposed so hosts
/// can apply [`CORRECTED_TAX_BANDS`] or a future-year table without
/// touching the lookup logic.
pub fn tax_for_bands(annual_income: Decimal, bands: &[TaxBand]) -> Decimal {
    for band in bands {
        let above_floor = annual_income > band.floor;
        let within_ceiling = band.ceiling.is_none_or(|c| annual_income <= c);
        if above_floor && within_ceiling {
            return (annual_income - band.taxable_above) * band.rate + band.carry_forward;
        }
    }
    Decimal::ZERO
}
