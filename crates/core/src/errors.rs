//! Core error types for the net worth dashboard.
//!
//! Pure computation errors (unit parsing, percentage deltas, projection
//! preconditions) are raised to the caller. Fetch failures are reported by the
//! backend layer as [`Error::Fetch`] and degrade to "no data" in the services.

use chrono::NaiveDate;
use thiserror::Error;

use crate::comparison::Direction;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the dashboard core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unit conversion failed: {0}")]
    Format(#[from] FormatError),

    #[error("Comparison failed: {0}")]
    Division(#[from] DivisionError),

    #[error("Projection failed: {0}")]
    Projection(#[from] ProjectionError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to fetch investments: {0}")]
    Fetch(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// A magnitude string could not be read as crores.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("'{0}' must include \"Crore\" or \"Lakh\"")]
    MissingUnit(String),

    #[error("'{0}' does not start with a number")]
    InvalidNumber(String),
}

/// The percentage delta has a zero denominator for the given direction.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Cannot compute {direction} delta: {denominator} value is zero")]
pub struct DivisionError {
    pub direction: Direction,
    pub denominator: &'static str,
}

/// Errors raised while generating a projected series.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("Step size must be at least one day")]
    InvalidStep,

    #[error("Date out of range when advancing {days} days from {from}")]
    DateOutOfRange { from: NaiveDate, days: u64 },
}

/// Validation errors for inputs and backend data.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Value for '{0}' is not a finite number")]
    NonFinite(String),

    #[error("Failed to parse date '{0}'")]
    DateParse(String),
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
