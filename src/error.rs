//! Error types for the take-home pay engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The engine's arithmetic is total, so the only failure mode is malformed
//! input: an unrecognized pay period name or an overtime-band key that does
//! not parse to a non-negative number.

use thiserror::Error;

/// The main error type for the take-home pay engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout a host application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "period".to_string(),
///     message: "unrecognized period 'fortnight'".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid input for 'period': unrecognized period 'fortnight'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// An input value could not be interpreted.
    ///
    /// Raised for an unrecognized pay period name or a non-numeric (or
    /// negative) overtime-band multiplier key. No other error kinds exist;
    /// the band lookups themselves are total over any income.
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput {
        /// The input field that was rejected.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
