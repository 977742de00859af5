//! Log severity levels.

use std::fmt;
use std::str::FromStr;

use super::LoggingError;

/// Severity of a log record, from most to least severe.
///
/// Levels are ordered so that a more severe level compares *less* than a
/// more verbose one: `Panic < Fatal < Error < Warn < Info < Debug < Trace`.
/// A record is emitted when its level is less than or equal to the current
/// threshold.
///
/// # Examples
///
/// ```rust
/// use utilkit::logging::LogLevel;
///
/// assert!(LogLevel::Error < LogLevel::Info);
/// assert_eq!("warn".parse::<LogLevel>(), Ok(LogLevel::Warn));
/// assert_eq!(LogLevel::Info.name_formatted(), "[INFO]  ");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LogLevel {
    /// Unrecoverable programming error.
    Panic = 0,
    /// Unrecoverable runtime failure.
    Fatal = 1,
    /// Operation failed.
    Error = 2,
    /// Something unexpected that was handled.
    Warn = 3,
    /// Normal operational messages.
    Info = 4,
    /// Diagnostics for developers.
    Debug = 5,
    /// Very detailed diagnostics.
    Trace = 6,
}

impl LogLevel {
    /// Every level, most severe first.
    pub const ALL: [Self; 7] = [
        Self::Panic,
        Self::Fatal,
        Self::Error,
        Self::Warn,
        Self::Info,
        Self::Debug,
        Self::Trace,
    ];

    /// Returns every level, most severe first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &Self::ALL
    }

    /// Returns the upper-case name of the level.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Panic => "PANIC",
            Self::Fatal => "FATAL",
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
        }
    }

    /// Returns the bracketed name padded to a fixed width of eight characters.
    ///
    /// [`log`](super::log) puts this tag in front of every message so that
    /// the messages line up.
    #[must_use]
    pub const fn name_formatted(self) -> &'static str {
        match self {
            Self::Panic => "[PANIC] ",
            Self::Fatal => "[FATAL] ",
            Self::Error => "[ERROR] ",
            Self::Warn => "[WARN]  ",
            Self::Info => "[INFO]  ",
            Self::Debug => "[DEBUG] ",
            Self::Trace => "[TRACE] ",
        }
    }

    /// Returns the `tracing` level records at this level are emitted with.
    #[must_use]
    pub const fn tracing_level(self) -> tracing::Level {
        match self {
            Self::Panic | Self::Fatal | Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        super::DEFAULT_LEVEL
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for LogLevel {
    type Err = LoggingError;

    /// Parses a level name case-insensitively.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| LoggingError::UnknownLevel(name.to_string()))
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = LoggingError;

    fn try_from(value: u8) -> Result<Self, LoggingError> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(LoggingError::UnknownLevelNumber(value))
    }
}
