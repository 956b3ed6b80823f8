//! Error types for candela input validation.

use chrono::NaiveDate;
use thiserror::Error;

/// Error for invalid date ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// Start date is after end date.
    #[error("Invalid date range: {start} > {end}")]
    InvalidRange {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },
}

/// Error for date strings that are not valid compact `YYYYMMDD` dates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid date '{0}', expected YYYYMMDD format")]
pub struct DateParseError(String);

impl DateParseError {
    pub(crate) fn new(input: &str) -> Self {
        Self(input.to_string())
    }
}
