//! # utilkit
//!
//! Small building blocks shared by services and command-line tools.
//!
//! ## Overview
//!
//! - **Collections**: a generic hash [`Set`](collections::Set) with set algebra,
//!   plus slice, map and lazy sequence helpers
//! - **Logging**: a leveled logging facade emitting `tracing` events
//! - **Environment**: typed, prefixed environment variable lookups
//! - **Build Info**: the build timestamp embedded at compile time
//! - **Utilities**: word-aware truncation, epoch conversion, scoped file access
//!
//! ## Feature Flags
//!
//! - `collections`: Set and collection helpers
//! - `logging`: Leveled logging (implies `env`)
//! - `env`: Environment variable helpers (implies `collections`)
//! - `buildinfo`: Build timestamp
//! - `util`: `text`, `time` and `fs` helpers
//! - `serde`: Serialization support for `Set`
//! - `fxhash`: `FxSet` alias using `rustc-hash`
//! - `ahash`: `ASet` alias using `ahash`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use utilkit::prelude::*;
//!
//! let enabled = Set::from_slice(&["search", "export"]);
//! let requested = Set::from_slice(&["export", "import"]);
//!
//! let granted = enabled.intersect(&requested);
//! assert_eq!(granted.to_vec(), vec!["export"]);
//!
//! let env = MapEnv::new().with("APP_VERBOSE", "on");
//! assert!(is_truthy(&EnvVarHelper::with_source("", env).string("VERBOSE", "")));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the most commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use utilkit::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "collections")]
    pub use crate::collections::Set;

    #[cfg(feature = "logging")]
    pub use crate::logging::LogLevel;

    #[cfg(feature = "env")]
    pub use crate::env::{EnvSource, EnvVarHelper, MapEnv, ProcessEnv, is_truthy};
}

#[cfg(feature = "collections")]
pub mod collections;

#[cfg(feature = "logging")]
pub mod logging;

#[cfg(feature = "env")]
pub mod env;

#[cfg(feature = "buildinfo")]
pub mod buildinfo;

#[cfg(feature = "util")]
pub mod text;

#[cfg(feature = "util")]
pub mod time;

#[cfg(feature = "util")]
pub mod fs;
