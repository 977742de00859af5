//! Time conversion helpers.

use std::num::ParseIntError;

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors produced by [`epoch_to_time`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// The input string was empty.
    #[error("empty epoch string")]
    Empty,

    /// The input is not a base-10 signed 64-bit integer.
    #[error("invalid epoch seconds: {0}")]
    InvalidNumber(#[from] ParseIntError),

    /// The number of seconds is outside the representable date range.
    #[error("epoch seconds out of range: {0}")]
    OutOfRange(i64),
}

/// Converts a string of seconds since the Unix epoch into a UTC date-time.
///
/// # Errors
///
/// Returns [`TimeError::Empty`] for an empty string,
/// [`TimeError::InvalidNumber`] if it is not an integer, and
/// [`TimeError::OutOfRange`] if the seconds cannot be represented.
///
/// # Examples
///
/// ```rust
/// use utilkit::time::epoch_to_time;
///
/// let time = epoch_to_time("86400").unwrap();
/// assert_eq!(time.to_rfc3339(), "1970-01-02T00:00:00+00:00");
/// ```
pub fn epoch_to_time(seconds: &str) -> Result<DateTime<Utc>, TimeError> {
    if seconds.is_empty() {
        return Err(TimeError::Empty);
    }
    let seconds = seconds.parse::<i64>()?;
    DateTime::from_timestamp(seconds, 0).ok_or(TimeError::OutOfRange(seconds))
}
