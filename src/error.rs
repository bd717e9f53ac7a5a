//! Error types for the attendance payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while deriving payroll figures.
//! Missing attendance rows or a missing salary are never errors: they are
//! the normal state of a newly onboarded employee and count as zero.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the attendance payroll engine.
///
/// # Example
///
/// ```
/// use attendance_payroll::error::PayrollError;
///
/// let error = PayrollError::ConfigNotFound {
///     path: "/missing/payroll.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/payroll.yaml");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds values the engine cannot use.
    #[error("Invalid configuration '{path}': {message}")]
    InvalidConfig {
        /// The path to the offending file.
        path: String,
        /// What was wrong with it.
        message: String,
    },

    /// A month outside 1..=12 (or a year chrono cannot represent).
    #[error("Invalid month {month} for year {year}")]
    InvalidMonth {
        /// The requested year.
        year: i32,
        /// The requested month.
        month: u32,
    },

    /// A date range whose end precedes its start.
    #[error("Invalid date range: {start} to {end}")]
    InvalidDateRange {
        /// Inclusive start of the range.
        start: NaiveDate,
        /// Inclusive end of the range.
        end: NaiveDate,
    },

    /// Salary proration was requested over zero working days.
    #[error("Division undefined: {operation} requires at least one working day")]
    DivisionUndefined {
        /// The computation that needed a non-zero divisor.
        operation: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
