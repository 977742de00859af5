//! Collection types and helpers.
//!
//! - [`Set`]: unordered set of unique elements with set algebra
//! - Slice helpers: [`map`], [`filter`], [`join`]
//! - Map helpers: [`keys`], [`values`], [`reverse_map`], [`filter_map`]
//! - Lazy sequence helpers: [`map_seq`], [`filter_seq`], [`join_seq`]
//!
//! # Examples
//!
//! ```rust
//! use utilkit::collections::{Set, join_seq};
//!
//! let set = Set::from_slice(&[3, 1, 2]);
//! let mut elements = set.to_vec();
//! elements.sort_unstable();
//!
//! assert_eq!(join_seq(elements, ",", |value| value.to_string()), "1,2,3");
//! ```

mod map;
mod seq;
mod set;
mod slice;

pub use map::filter_map;
pub use map::keys;
pub use map::keys_seq;
pub use map::reverse_map;
pub use map::values;
pub use map::values_seq;
pub use seq::filter_seq;
pub use seq::join_seq;
pub use seq::map_seq;
pub use set::Set;
pub use set::SetIntoIterator;
pub use set::SetIterator;
pub use slice::filter;
pub use slice::join;
pub use slice::map;

// =============================================================================
// Fast Hasher Aliases
// =============================================================================

/// A [`Set`] hashed with `rustc-hash`'s `FxHasher`.
///
/// Faster than the default hasher for small keys such as integers, but not
/// resistant to hash flooding. Build one with `FxSet::default()` or `collect()`.
///
/// ```rust
/// use utilkit::collections::FxSet;
///
/// let set: FxSet<u32> = (0..4).collect();
/// assert!(set.contains(&3));
/// ```
#[cfg(feature = "fxhash")]
pub type FxSet<T> = Set<T, rustc_hash::FxBuildHasher>;

/// A [`Set`] hashed with `ahash`.
///
/// ```rust
/// use utilkit::collections::ASet;
///
/// let mut set: ASet<&str> = ASet::default();
/// set.add("key");
/// assert!(set.contains("key"));
/// ```
#[cfg(feature = "ahash")]
pub type ASet<T> = Set<T, ahash::RandomState>;
