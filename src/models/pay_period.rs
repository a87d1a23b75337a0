//! Pay period model.
//!
//! This module contains the [`PayPeriod`] enum that fixes the reporting
//! interval for a calculation and the multiplier used to annualize
//! per-period earnings before the yearly-denominated tax and national
//! insurance tables are applied.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The reporting interval for pay figures.
///
/// Every monetary input is interpreted as "per one of these", and every
/// figure in the result is expressed in the same unit. The period also
/// determines the annualization multiplier: tax and national insurance
/// tables are denominated in yearly income, so per-period gross is scaled
/// up by [`PayPeriod::periods_per_year`] before the bands are applied and
/// the deductions are scaled back down afterwards.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
/// use rust_decimal::Decimal;
///
/// let period: PayPeriod = "week".parse().unwrap();
/// assert_eq!(period, PayPeriod::Week);
/// assert_eq!(period.periods_per_year(), Decimal::from(52));
///
/// // Unrecognized names are rejected rather than silently defaulted.
/// assert!("fortnight".parse::<PayPeriod>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayPeriod {
    /// Weekly figures; 52 periods per year.
    Week,
    /// Monthly figures; 12 periods per year.
    Month,
    /// Yearly figures; the identity multiplier.
    Year,
}

impl PayPeriod {
    /// Returns the number of periods in one year as a `Decimal`.
    ///
    /// Week → 52, Month → 12, Year → 1.
    pub fn periods_per_year(&self) -> Decimal {
        match self {
            PayPeriod::Week => Decimal::from(52),
            PayPeriod::Month => Decimal::from(12),
            PayPeriod::Year => Decimal::ONE,
        }
    }
}

impl FromStr for PayPeriod {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(PayPeriod::Week),
            "month" => Ok(PayPeriod::Month),
            "year" => Ok(PayPeriod::Year),
            other => Err(EngineError::InvalidInput {
                field: "period".to_string(),
                message: format!(
                    "unrecognized period '{other}', expected 'week', 'month' or 'year'"
                ),
            }),
        }
    }
}

impl fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PayPeriod::Week => "week",
            PayPeriod::Month => "month",
            PayPeriod::Year => "year",
        };
        write!(f, "{name}")
    }
}
