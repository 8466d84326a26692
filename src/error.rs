//! Error types for the Attendance Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can surface around the engine: configuration
//! loading, input parsing, exception entry and wizard navigation. The
//! period/attendance calculations themselves never fail.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Attendance Engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// Configuration parsed but holds a value the engine cannot use.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A date field could not be read as `YYYY-MM-DD`.
    #[error("Invalid date for '{field}': {value}")]
    InvalidDate {
        /// The input field holding the date.
        field: String,
        /// The raw value that failed to parse.
        value: String,
    },

    /// The date is already registered as an exception.
    #[error("Date {date} is already in the exception list")]
    DuplicateExceptionDate {
        /// The repeated date.
        date: NaiveDate,
    },

    /// The date is already part of the previewed attendance list.
    #[error("Date {date} is already in the attendance list")]
    DateAlreadyInAttendance {
        /// The repeated date.
        date: NaiveDate,
    },

    /// The exception CSV could not be read.
    #[error("Invalid CSV at line {line}: {message}")]
    InvalidCsv {
        /// The 1-based line of the failure.
        line: u64,
        /// A description of the failure.
        message: String,
    },

    /// A wizard step is missing required data.
    #[error("Step {step} is incomplete: {message}")]
    StepIncomplete {
        /// The step number (1..5).
        step: u8,
        /// What is missing.
        message: String,
    },

    /// An export was requested with no report selected.
    #[error("No reports selected for export")]
    NothingSelected,

    /// No generated report has the requested id.
    #[error("Report not found: {id}")]
    ReportNotFound {
        /// The id that was requested.
        id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
