//! Build timestamp embedded at compile time.
//!
//! The timestamp is taken from the `UTILKIT_BUILD_TIMESTAMP` environment
//! variable when the crate is compiled, for example from a build script or CI:
//!
//! ```text
//! UTILKIT_BUILD_TIMESTAMP=2024-05-01T12:30:00+0200 cargo build --release
//! ```
//!
//! Both the ISO 8601 basic offset form ([`TIMESTAMP_FORMAT`]) and RFC 3339 are
//! accepted.
//!
//! # Examples
//!
//! ```rust
//! use utilkit::buildinfo::{self, BuildInfoError};
//!
//! match buildinfo::timestamp() {
//!     Ok(built_at) => println!("built at {built_at}"),
//!     Err(BuildInfoError::NoTimestamp) => println!("development build"),
//!     Err(error) => eprintln!("{error}"),
//! }
//! ```

use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset};
use thiserror::Error;

/// `chrono` format string tried first when parsing the build timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

const RAW_TIMESTAMP: &str = match option_env!("UTILKIT_BUILD_TIMESTAMP") {
    Some(timestamp) => timestamp,
    None => "",
};

static TIMESTAMP: LazyLock<Result<DateTime<FixedOffset>, BuildInfoError>> =
    LazyLock::new(|| parse_timestamp(RAW_TIMESTAMP));

/// Errors produced when reading the build timestamp.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BuildInfoError {
    /// No timestamp was provided at compile time.
    #[error("no build timestamp set")]
    NoTimestamp,

    /// The provided timestamp is in neither accepted format.
    #[error("invalid build timestamp: {0}")]
    Parse(#[from] chrono::ParseError),
}

/// Returns the build timestamp exactly as provided, or `""` if none was.
#[must_use]
pub const fn raw_timestamp() -> &'static str {
    RAW_TIMESTAMP
}

/// Returns the parsed build timestamp. Parsing happens once, on first call.
///
/// # Errors
///
/// Returns [`BuildInfoError::NoTimestamp`] if no timestamp was provided, or
/// [`BuildInfoError::Parse`] if it could not be parsed.
pub fn timestamp() -> Result<DateTime<FixedOffset>, BuildInfoError> {
    *TIMESTAMP
}

/// Parses `raw` using [`TIMESTAMP_FORMAT`], falling back to RFC 3339.
///
/// # Errors
///
/// Returns [`BuildInfoError::NoTimestamp`] for an empty string and
/// [`BuildInfoError::Parse`] with the RFC 3339 failure when neither format
/// matches.
///
/// # Examples
///
/// ```rust
/// use utilkit::buildinfo::parse_timestamp;
///
/// let basic = parse_timestamp("2024-05-01T12:30:00+0200").unwrap();
/// let rfc3339 = parse_timestamp("2024-05-01T10:30:00Z").unwrap();
/// assert_eq!(basic, rfc3339);
/// ```
pub fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, BuildInfoError> {
    if raw.is_empty() {
        return Err(BuildInfoError::NoTimestamp);
    }
    DateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map_err(BuildInfoError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use rstest::rstest;

    #[rstest]
    fn test_parse_basic_offset() {
        let parsed = parse_timestamp("2023-11-14T08:05:09+0100").unwrap();
        assert_eq!(parsed.year(), 2023);
        assert_eq!(parsed.hour(), 8);
        assert_eq!(parsed.offset().local_minus_utc(), 3600);
    }

    #[rstest]
    #[case("2023-11-14T07:05:09Z")]
    #[case("2023-11-14T08:05:09+01:00")]
    fn test_parse_rfc3339_fallback(#[case] raw: &str) {
        let parsed = parse_timestamp(raw).unwrap();
        assert_eq!(parsed.timestamp(), 1_699_945_509);
    }

    #[rstest]
    fn test_parse_empty_is_no_timestamp() {
        assert_eq!(parse_timestamp(""), Err(BuildInfoError::NoTimestamp));
    }

    #[rstest]
    #[case("yesterday")]
    #[case("2023-11-14")]
    #[case("2023-13-14T08:05:09Z")]
    fn test_parse_invalid(#[case] raw: &str) {
        assert!(matches!(
            parse_timestamp(raw),
            Err(BuildInfoError::Parse(_))
        ));
    }

    #[rstest]
    fn test_timestamp_agrees_with_raw() {
        let expected = parse_timestamp(raw_timestamp());
        assert_eq!(timestamp(), expected);
        assert_eq!(timestamp(), timestamp());
    }
}
