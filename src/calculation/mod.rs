//! Calculation logic for the take-home pay engine.
//!
//! This module contains the band lookups for income tax, national
//! insurance, and pension deductions, the overtime-band summation, and the
//! [`PayrollCalculator`] that orchestrates them over an annualization
//! round-trip.

mod national_insurance;
mod overtime;
mod pension;
mod take_home;
mod tax;

pub use national_insurance::{
    ContributionBand, NI_BANDS, PRIMARY_THRESHOLD, UPPER_BAND_CARRY, UPPER_EARNINGS_LIMIT,
    national_insurance,
};
pub use overtime::{calculate_overtime_pay, parse_multiplier};
pub use pension::pension;
pub use take_home::PayrollCalculator;
pub use tax::{
    ADDITIONAL_BAND_CARRY, ADDITIONAL_RATE_OFFSET, BASIC_RATE_CEILING, CORRECTED_TAX_BANDS,
    HIGHER_BAND_CARRY, HIGHER_RATE_CEILING, PERSONAL_ALLOWANCE, TAX_BANDS, TaxBand, tax_for_bands,
    tax_reduction,
};
