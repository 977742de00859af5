//! Leveled logging facade.
//!
//! Records are filtered against a process-wide [`LogLevel`] threshold and
//! then emitted as [`tracing`] events, tagged with the level name and the
//! caller's location. Any `tracing` subscriber can consume them; [`init`]
//! installs a plain one that writes `Error` and more severe records to
//! stderr and everything else to stdout.
//!
//! # Examples
//!
//! ```rust
//! use utilkit::logf;
//! use utilkit::logging::{self, LogLevel};
//!
//! logging::set_log_level(LogLevel::Debug);
//! logging::debug("cache warmed");
//! logf!(LogLevel::Info, "listening on port {}", 8080);
//! logging::trace("not emitted at the Debug threshold");
//! ```

mod level;

pub use level::LogLevel;

use std::fmt;
use std::panic::Location;
use std::sync::atomic::{AtomicU8, Ordering};

use thiserror::Error;

use crate::env::{EnvSource, ProcessEnv};

/// Threshold in effect until one of the `set_log_level*` functions is called.
pub const DEFAULT_LEVEL: LogLevel = LogLevel::Info;

/// Least severe level whose records [`init`] routes to stderr.
pub const STDERR_LEVEL: LogLevel = LogLevel::Error;

static LOG_LEVEL: AtomicU8 = AtomicU8::new(DEFAULT_LEVEL as u8);

/// Errors produced when configuring logging.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoggingError {
    /// The name does not match any level.
    #[error("unknown log level: {0}")]
    UnknownLevel(String),

    /// The number does not match any level.
    #[error("unknown log level: {0}")]
    UnknownLevelNumber(u8),

    /// A global subscriber could not be installed.
    #[error("failed to install log subscriber: {0}")]
    SubscriberInit(String),
}

// =============================================================================
// Threshold
// =============================================================================

/// Returns the current threshold.
pub fn log_level() -> LogLevel {
    LogLevel::try_from(LOG_LEVEL.load(Ordering::Relaxed)).unwrap_or(DEFAULT_LEVEL)
}

/// Sets the threshold. Records less severe than `level` are discarded.
pub fn set_log_level(level: LogLevel) {
    LOG_LEVEL.store(level as u8, Ordering::Relaxed);
}

/// Sets the threshold from a level name, case-insensitively.
///
/// # Errors
///
/// Returns [`LoggingError::UnknownLevel`] if `name` is not a level name; the
/// threshold is left unchanged.
pub fn set_log_level_by_name(name: &str) -> Result<(), LoggingError> {
    set_log_level(name.parse()?);
    Ok(())
}

/// Sets the threshold from the process environment variable `variable`.
///
/// An unset or empty variable leaves the threshold unchanged.
///
/// # Errors
///
/// Returns [`LoggingError::UnknownLevel`] if the variable holds an unknown name.
pub fn set_log_level_from_env(variable: &str) -> Result<(), LoggingError> {
    set_log_level_from(&ProcessEnv, variable)
}

/// Sets the threshold from `variable` as read from `source`.
///
/// # Errors
///
/// Returns [`LoggingError::UnknownLevel`] if the variable holds an unknown name.
pub fn set_log_level_from(source: &impl EnvSource, variable: &str) -> Result<(), LoggingError> {
    match source.var(variable) {
        Some(value) if !value.is_empty() => set_log_level_by_name(&value),
        _ => Ok(()),
    }
}

/// Returns `true` if a record at `level` would be emitted.
pub fn enabled(level: LogLevel) -> bool {
    level <= log_level()
}

// =============================================================================
// Emission
// =============================================================================

/// Emits a record at `level` if the threshold allows it.
///
/// The message is prefixed with [`LogLevel::name_formatted`] and emitted at
/// [`LogLevel::tracing_level`]. Prefer the per-level functions or the
/// [`logf!`](crate::logf) macro.
#[track_caller]
pub fn log(level: LogLevel, arguments: fmt::Arguments<'_>) {
    use tracing::Level;

    if !enabled(level) {
        return;
    }

    let caller = caller_info(Location::caller());
    let severity = level.name();
    let tag = level.name_formatted();
    // Event macros need a constant level, so dispatch on the mapped one.
    let event_level = level.tracing_level();
    if event_level == Level::ERROR {
        tracing::error!(severity, caller = %caller, "{tag}{arguments}");
    } else if event_level == Level::WARN {
        tracing::warn!(severity, caller = %caller, "{tag}{arguments}");
    } else if event_level == Level::INFO {
        tracing::info!(severity, caller = %caller, "{tag}{arguments}");
    } else if event_level == Level::DEBUG {
        tracing::debug!(severity, caller = %caller, "{tag}{arguments}");
    } else {
        tracing::trace!(severity, caller = %caller, "{tag}{arguments}");
    }
}

/// Formats a caller location as `parent_dir/file.rs:line`.
fn caller_info(location: &Location<'_>) -> String {
    let mut components = location
        .file()
        .rsplitn(3, |character: char| character == '/' || character == '\\');
    let file = components.next().unwrap_or_default();
    match components.next() {
        Some(directory) => format!("{directory}/{file}:{}", location.line()),
        None => format!("{file}:{}", location.line()),
    }
}

macro_rules! level_functions {
    ($($(#[$meta:meta])* $name:ident => $level:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[track_caller]
            pub fn $name(message: impl fmt::Display) {
                log(LogLevel::$level, format_args!("{message}"));
            }
        )*
    };
}

level_functions! {
    /// Logs `message` at [`LogLevel::Panic`]. Only logs; does not panic.
    panic => Panic,
    /// Logs `message` at [`LogLevel::Fatal`]. Only logs; does not exit.
    fatal => Fatal,
    /// Logs `message` at [`LogLevel::Error`].
    error => Error,
    /// Logs `message` at [`LogLevel::Warn`].
    warn => Warn,
    /// Logs `message` at [`LogLevel::Info`].
    info => Info,
    /// Logs `message` at [`LogLevel::Debug`].
    debug => Debug,
    /// Logs `message` at [`LogLevel::Trace`].
    trace => Trace,
}

/// Logs a formatted message at the given [`LogLevel`].
///
/// # Examples
///
/// ```rust
/// use utilkit::logf;
/// use utilkit::logging::LogLevel;
///
/// let attempts = 3;
/// logf!(LogLevel::Warn, "retrying after {attempts} attempts");
/// ```
#[macro_export]
macro_rules! logf {
    ($level:expr, $($argument:tt)+) => {
        $crate::logging::log($level, ::std::format_args!($($argument)+))
    };
}

// =============================================================================
// Subscriber
// =============================================================================

/// Installs a global `tracing` subscriber that writes `Error` and more severe
/// records to stderr and all others to stdout.
///
/// # Errors
///
/// Returns [`LoggingError::SubscriberInit`] if a global subscriber is
/// already installed.
pub fn try_init() -> Result<(), LoggingError> {
    use tracing_subscriber::fmt::writer::MakeWriterExt;

    let writer = std::io::stderr
        .with_max_level(STDERR_LEVEL.tracing_level())
        .or_else(std::io::stdout);

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_max_level(tracing::Level::TRACE)
        .with_target(false)
        .try_init()
        .map_err(|error| LoggingError::SubscriberInit(error.to_string()))
}

/// Installs the subscriber described in [`try_init`], ignoring the error
/// when one is already installed.
pub fn init() {
    if let Err(error) = try_init() {
        warn(format_args!("{error}"));
    }
}

// =============================================================================
// Tests
// =============================================================================
