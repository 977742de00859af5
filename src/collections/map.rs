//! Helpers over [`HashMap`]s.
//!
//! The hasher of the input map is kept on filtered results; reversed maps
//! use the default hasher.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Returns the keys of `map` in unspecified order.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use utilkit::collections::keys;
///
/// let map = HashMap::from([("a", 1), ("b", 2)]);
/// let mut result = keys(&map);
/// result.sort_unstable();
/// assert_eq!(result, vec!["a", "b"]);
/// ```
pub fn keys<K: Clone, V, S>(map: &HashMap<K, V, S>) -> Vec<K> {
    map.keys().cloned().collect()
}

/// Returns a lazy iterator over the keys of `map`.
pub fn keys_seq<K, V, S>(map: &HashMap<K, V, S>) -> impl Iterator<Item = &K> {
    map.keys()
}

/// Returns the values of `map` in unspecified order.
pub fn values<K, V: Clone, S>(map: &HashMap<K, V, S>) -> Vec<V> {
    map.values().cloned().collect()
}

/// Returns a lazy iterator over the values of `map`.
pub fn values_seq<K, V, S>(map: &HashMap<K, V, S>) -> impl Iterator<Item = &V> {
    map.values()
}

/// Swaps the keys and values of `map`.
///
/// When several keys share a value only one of them survives, and which one
/// is unspecified.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use utilkit::collections::reverse_map;
///
/// let map = HashMap::from([("one", 1), ("two", 2)]);
/// let reversed = reverse_map(&map);
/// assert_eq!(reversed.get(&1), Some(&"one"));
/// ```
pub fn reverse_map<K, V, S>(map: &HashMap<K, V, S>) -> HashMap<V, K>
where
    K: Clone,
    V: Clone + Hash + Eq,
{
    let mut reversed = HashMap::with_capacity(map.len());
    for (key, value) in map {
        reversed.insert(value.clone(), key.clone());
    }
    reversed
}

/// Returns the entries of `map` for which `predicate` holds.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use utilkit::collections::filter_map;
///
/// let map = HashMap::from([("a", 1), ("b", 2), ("c", 3)]);
/// let odd = filter_map(&map, |_, value| value % 2 == 1);
/// assert_eq!(odd.len(), 2);
/// ```
pub fn filter_map<K, V, S, P>(map: &HashMap<K, V, S>, mut predicate: P) -> HashMap<K, V, S>
where
    K: Clone + Hash + Eq,
    V: Clone,
    S: BuildHasher + Clone,
    P: FnMut(&K, &V) -> bool,
{
    let mut filtered = HashMap::with_hasher(map.hasher().clone());
    for (key, value) in map {
        if predicate(key, value) {
            filtered.insert(key.clone(), value.clone());
        }
    }
    filtered
}
