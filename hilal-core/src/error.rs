//! Error types for hilal.

use thiserror::Error;

use crate::calendar::CalendarKind;

/// Errors that can occur in hilal operations.
#[derive(Error, Debug)]
pub enum HilalError {
    #[error("Invalid {calendar} date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        calendar: CalendarKind,
        year: i32,
        month: u8,
        day: u8,
    },

    #[error("Year {year} is outside the supported {calendar} range (1..=9999)")]
    UnsupportedYear { calendar: CalendarKind, year: i32 },

    #[error("Calendar conversion failed: {0}")]
    Conversion(String),

    #[error("Invalid person record: {0}")]
    InvalidPerson(String),

    #[error("Person not found: {0}")]
    PersonNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for hilal operations.
pub type HilalResult<T> = Result<T, HilalError>;
