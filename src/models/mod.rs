//! Core data models for the take-home pay engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_input;
mod calculation_result;
mod pay_period;

pub use calculation_input::{CalculationInput, OvertimeBands};
pub use calculation_result::CalculationResult;
pub use pay_period::PayPeriod;
