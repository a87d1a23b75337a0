//! Take-home pay calculation engine.
//!
//! This crate computes an individual's take-home pay from gross pay inputs
//! (base hourly rate, base hours, overtime bands, pension contribution rate)
//! over a weekly, monthly, or yearly reporting period. Variable-period
//! earnings are annualized, run through a progressive income-tax schedule and
//! a two-tier national insurance levy, and de-annualized back to the
//! requested period.
//!
//! The whole calculation is a pure function over its inputs: no I/O, no
//! shared state, and every call returns a fresh [`models::CalculationResult`].

#![warn(missing_docs)]

pub mod calculation;
pub mod error;
pub mod models;
