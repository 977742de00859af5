//! Sources of environment variables.
//!
//! Lookups go through [`EnvSource`] so that code reading configuration can be
//! exercised against an in-memory [`MapEnv`] instead of the real process
//! environment.

use std::collections::HashMap;

/// A read-only view of environment variables.
pub trait EnvSource {
    /// Returns the value of `name`, or `None` if it is unset or not valid Unicode.
    fn var(&self, name: &str) -> Option<String>;
}

/// The environment of the current process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// An in-memory set of variables.
///
/// # Examples
///
/// ```rust
/// use utilkit::env::{EnvSource, MapEnv};
///
/// let env = MapEnv::new().with("APP_PORT", "8080");
/// assert_eq!(env.var("APP_PORT").as_deref(), Some("8080"));
/// assert_eq!(env.var("APP_HOST"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    variables: HashMap<String, String>,
}

impl MapEnv {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the environment with `name` set to `value`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets `name` to `value`, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(name.into(), value.into());
    }

    /// Unsets `name`.
    pub fn remove(&mut self, name: &str) {
        self.variables.remove(name);
    }
}

impl EnvSource for MapEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.variables.get(name).cloned()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = Self::new();
        for (name, value) in iter {
            env.set(name, value);
        }
        env
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_map_env_set_and_remove() {
        let mut env = MapEnv::new();
        env.set("KEY", "one");
        env.set("KEY", "two");
        assert_eq!(env.var("KEY").as_deref(), Some("two"));

        env.remove("KEY");
        assert_eq!(env.var("KEY"), None);
    }

    #[rstest]
    fn test_map_env_from_iterator() {
        let env: MapEnv = [("A", "1"), ("B", "2")].into_iter().collect();
        assert_eq!(env.var("B").as_deref(), Some("2"));
    }

    #[rstest]
    fn test_process_env_missing_variable() {
        assert_eq!(ProcessEnv.var("UTILKIT_SURELY_UNSET_VARIABLE_7F3A"), None);
    }

    #[rstest]
    fn test_reference_is_a_source() {
        fn read(source: impl EnvSource) -> Option<String> {
            source.var("X")
        }
        let env = MapEnv::new().with("X", "y");
        assert_eq!(read(&env).as_deref(), Some("y"));
    }
}
