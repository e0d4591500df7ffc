//! Error types for office-hours operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OfficeHoursError {
    /// A time string that is not a valid "H:MM" / "HH:MM" time of day.
    #[error("Invalid time format: {0:?}")]
    Format(String),

    /// A special-opening date that is not a valid "YYYY-MM-DD" calendar date.
    #[error("Invalid date: {0:?}")]
    InvalidDate(String),

    /// A configuration value with the wrong shape.
    #[error("Invalid configuration at {path}: {message}")]
    Config { path: String, message: String },
}

pub type Result<T> = std::result::Result<T, OfficeHoursError>;
