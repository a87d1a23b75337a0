//! Overtime pay calculation.
//!
//! Overtime arrives as a mapping from multiplier string (e.g. `"1.5"`,
//! `"2"`) to hours worked at that multiplier within the reporting period.
//! Keys are kept as strings at the model boundary so hosts can pass JSON
//! through untouched; this module parses them, rejecting anything that is
//! not a non-negative number.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::OvertimeBands;

/// Parses an overtime-band multiplier key.
///
/// The key must be the decimal form of a non-negative multiplier. Anything
/// else fails with [`EngineError::InvalidInput`].
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::parse_multiplier;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(
///     parse_multiplier("1.5").unwrap(),
///     Decimal::from_str("1.5").unwrap()
/// );
/// assert!(parse_multiplier("time-and-a-half").is_err());
/// assert!(parse_multiplier("-2").is_err());
/// ```
pub fn parse_multiplier(key: &str) -> EngineResult<Decimal> {
    let multiplier = key
        .parse::<Decimal>()
        .map_err(|_| EngineError::InvalidInput {
            field: "overtime_bands".to_string(),
            message: format!("multiplier '{key}' is not a number"),
        })?;

    if multiplier < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "overtime_bands".to_string(),
            message: format!("multiplier '{key}' is negative"),
        });
    }

    Ok(multiplier)
}

/// Calculates total overtime pay for one period.
///
/// Each band contributes `multiplier × base_rate × hours`; an empty map
/// yields zero. Fails with [`EngineError::InvalidInput`] on the first
/// malformed multiplier key.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_overtime_pay;
/// use payroll_engine::models::OvertimeBands;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mut bands = OvertimeBands::new();
/// bands.insert("1.5".to_string(), Decimal::from(5));
///
/// let pay = calculate_overtime_pay(&bands, Decimal::from(20)).unwrap();
/// assert_eq!(pay, Decimal::from_str("150.0").unwrap());
/// ```
pub fn calculate_overtime_pay(bands: &OvertimeBands, base_rate: Decimal) -> EngineResult<Decimal> {
    let mut total = Decimal::ZERO;
    for (key, hours) in bands {
        let multiplier = parse_multiplier(key)?;
        total += multiplier * base_rate * *hours;
    }
    Ok(total)
}
