//! Environment variable helpers.
//!
//! - [`EnvVarHelper`]: typed lookups of variables sharing a common prefix
//! - [`is_truthy`]: lenient "is this flag switched on" detection
//! - [`EnvSource`]: the seam through which variables are read
//!
//! # Examples
//!
//! ```rust
//! use utilkit::env::{EnvVarHelper, MapEnv};
//!
//! let env = MapEnv::new()
//!     .with("SHOP_DEBUG", "true")
//!     .with("SHOP_WORKERS", "8");
//! let helper = EnvVarHelper::with_source("SHOP", env);
//!
//! assert_eq!(helper.prefix_var("DEBUG"), "SHOP_DEBUG");
//! assert_eq!(helper.bool("DEBUG", false), Ok(true));
//! assert_eq!(helper.int("WORKERS", 1), Ok(8));
//! assert_eq!(helper.int("RETRIES", 3), Ok(3));
//! ```

mod source;

pub use source::EnvSource;
pub use source::MapEnv;
pub use source::ProcessEnv;

use std::num::ParseIntError;
use std::sync::LazyLock;

use thiserror::Error;

use crate::collections::Set;

/// Prefix used by [`EnvVarHelper::new`] when given an empty prefix.
pub const DEFAULT_ENV_VAR_PREFIX: &str = "APP_";

/// Errors produced while converting a variable's value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnvError {
    /// The value is not one of the accepted boolean spellings.
    #[error("invalid boolean value for {name}: {value:?}")]
    InvalidBool {
        /// The full (prefixed) variable name.
        name: String,
        /// The raw value.
        value: String,
    },

    /// The value is not a base-10 signed 64-bit integer.
    #[error("invalid integer value for {name}: {value:?}: {source}")]
    InvalidInt {
        /// The full (prefixed) variable name.
        name: String,
        /// The raw value.
        value: String,
        /// The underlying parse failure.
        #[source]
        source: ParseIntError,
    },
}

// =============================================================================
// EnvVarHelper
// =============================================================================

/// Reads variables that share a common prefix, converting them to typed values.
///
/// An unset or empty variable yields the caller's default; a set but
/// malformed variable yields an [`EnvError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVarHelper<E = ProcessEnv> {
    prefix: String,
    source: E,
}

impl EnvVarHelper<ProcessEnv> {
    /// Creates a helper over the process environment.
    ///
    /// An empty prefix becomes [`DEFAULT_ENV_VAR_PREFIX`], and a prefix that
    /// does not end in `_` gets one appended.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use utilkit::env::EnvVarHelper;
    ///
    /// assert_eq!(EnvVarHelper::new("").prefix(), "APP_");
    /// assert_eq!(EnvVarHelper::new("MY").prefix(), "MY_");
    /// assert_eq!(EnvVarHelper::new("MY_").prefix(), "MY_");
    /// ```
    #[must_use]
    pub fn new(prefix: &str) -> Self {
        Self::with_source(prefix, ProcessEnv)
    }
}

impl<E: EnvSource> EnvVarHelper<E> {
    /// Creates a helper reading from `source`. The prefix is normalized as in
    /// [`EnvVarHelper::new`].
    pub fn with_source(prefix: &str, source: E) -> Self {
        let prefix = if prefix.is_empty() {
            DEFAULT_ENV_VAR_PREFIX.to_string()
        } else if prefix.ends_with('_') {
            prefix.to_string()
        } else {
            format!("{prefix}_")
        };
        Self { prefix, source }
    }

    /// Returns the normalized prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns `key` with the prefix prepended.
    #[must_use]
    pub fn prefix_var(&self, key: &str) -> String {
        format!("{}{key}", self.prefix)
    }

    fn raw(&self, key: &str) -> (String, Option<String>) {
        let name = self.prefix_var(key);
        let value = self.source.var(&name).filter(|value| !value.is_empty());
        (name, value)
    }

    /// Reads `key` as a string, falling back to `default` when unset or empty.
    pub fn string(&self, key: &str, default: &str) -> String {
        self.raw(key).1.unwrap_or_else(|| default.to_string())
    }

    /// Reads `key` as a boolean.
    ///
    /// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True`, `0`, `f`, `F`, `FALSE`,
    /// `false` and `False`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidBool`] for any other non-empty value.
    pub fn bool(&self, key: &str, default: bool) -> Result<bool, EnvError> {
        match self.raw(key) {
            (_, None) => Ok(default),
            (name, Some(value)) => parse_bool(&value).ok_or(EnvError::InvalidBool { name, value }),
        }
    }

    /// Reads `key` as a base-10 signed 64-bit integer.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidInt`] if the value does not parse.
    pub fn int(&self, key: &str, default: i64) -> Result<i64, EnvError> {
        match self.raw(key) {
            (_, None) => Ok(default),
            (name, Some(value)) => value
                .parse::<i64>()
                .map_err(|source| EnvError::InvalidInt {
                    name,
                    value: value.clone(),
                    source,
                }),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

// =============================================================================
// Truthy Values
// =============================================================================

static TRUTHY_VALUES: LazyLock<Set<String>> = LazyLock::new(|| {
    Set::from_seq(
        ["1", "true", "yes", "on", "enable"]
            .into_iter()
            .map(String::from),
    )
});

/// Returns the lower-case spellings that [`is_truthy`] accepts.
pub fn truthy_values() -> &'static Set<String> {
    &TRUTHY_VALUES
}

/// Returns `true` if `value`, lower-cased, is one of [`truthy_values`].
///
/// # Examples
///
/// ```rust
/// use utilkit::env::is_truthy;
///
/// assert!(is_truthy("YES"));
/// assert!(is_truthy("enable"));
/// assert!(!is_truthy("no"));
/// assert!(!is_truthy(""));
/// ```
pub fn is_truthy(value: &str) -> bool {
    TRUTHY_VALUES.contains(value.to_lowercase().as_str())
}

// =============================================================================
// Tests
// =============================================================================
