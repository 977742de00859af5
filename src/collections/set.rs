//! Hash-backed set with in-place mutation and set algebra.
//!
//! This module provides [`Set`], an unordered collection of unique elements
//! stored in a hash table.
//!
//! # Overview
//!
//! - O(1) average `contains`, `add` and `remove`
//! - O(1) `len` and `is_empty`
//! - Set algebra (`union`, `intersect`, `difference`) always allocates a new
//!   set and never modifies or aliases either operand
//!
//! Iteration order is unspecified and may differ between two calls on the
//! same set, so callers must never depend on it.
//!
//! # Examples
//!
//! ```rust
//! use utilkit::collections::Set;
//!
//! let mut set = Set::from_slice(&["a", "b", "c"]);
//! set.remove("b");
//!
//! assert_eq!(set.len(), 2);
//! assert!(set.contains("a"));
//! assert!(!set.contains("b"));
//! ```
//!
//! # Set Algebra
//!
//! ```rust
//! use utilkit::collections::Set;
//!
//! let set_a = Set::from_slice(&[1, 2, 3]);
//! let set_b = Set::from_slice(&[2, 3, 4]);
//!
//! assert_eq!(set_a.intersect(&set_b), Set::from_slice(&[2, 3]));
//! assert_eq!(set_a.union(&set_b), Set::from_slice(&[1, 2, 3, 4]));
//! assert_eq!(set_a.difference(&set_b), Set::from_slice(&[1]));
//! ```
//!
//! # Thread Safety
//!
//! `Set` has no internal locking. It is `Send`/`Sync` exactly when its
//! element type and hasher are; sharing one set between threads for mutation
//! requires external synchronization such as a `Mutex`.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::collections::hash_map::RandomState;
use std::collections::hash_set;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::{FromIterator, FusedIterator};

// =============================================================================
// Set Definition
// =============================================================================

/// An unordered collection of unique elements backed by a hash table.
///
/// `T` must be usable as a hash key (`Hash + Eq`). The hasher `S` defaults
/// to [`RandomState`]; the `FxSet` and `ASet` aliases enabled by the
/// `fxhash` and `ahash` features plug in faster hashers.
///
/// # Time Complexity
///
/// | Operation      | Complexity (average)  |
/// |----------------|-----------------------|
/// | `new`          | O(1)                  |
/// | `contains`     | O(1)                  |
/// | `add`          | O(1)                  |
/// | `remove`       | O(1)                  |
/// | `len`          | O(1)                  |
/// | `union`        | O(n + m)              |
/// | `intersect`    | O(min(n, m))          |
/// | `difference`   | O(n)                  |
///
/// # Examples
///
/// ```rust
/// use utilkit::collections::Set;
///
/// let mut set = Set::new();
/// set.add(42);
/// set.add(42);
///
/// assert_eq!(set.len(), 1);
/// assert!(set.contains(&42));
/// ```
pub struct Set<T, S = RandomState> {
    inner: HashSet<T, S>,
}

impl<T> Set<T, RandomState> {
    /// Creates an empty set without allocating.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use utilkit::collections::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: HashSet::new(),
        }
    }

    /// Creates an empty set with room for at least `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use utilkit::collections::Set;
    ///
    /// let set: Set<String> = Set::with_capacity(16);
    /// assert!(set.is_empty());
    /// assert!(set.capacity() >= 16);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HashSet::with_capacity(capacity),
        }
    }
}

impl<T: Hash + Eq> Set<T, RandomState> {
    /// Creates a set containing a single element.
    #[must_use]
    pub fn singleton(element: T) -> Self {
        let mut set = Self::with_capacity(1);
        set.add(element);
        set
    }

    /// Creates a set from the elements of a finite sequence.
    ///
    /// The final size is unknown until the sequence is exhausted, so the
    /// backing table may grow several times. An unbounded sequence never
    /// returns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use utilkit::collections::Set;
    ///
    /// let evens = Set::from_seq((0..10).filter(|value| value % 2 == 0));
    /// assert_eq!(evens.len(), 5);
    /// ```
    pub fn from_seq<I: IntoIterator<Item = T>>(sequence: I) -> Self {
        let mut set = Self::new();
        set.add_all_seq(sequence);
        set
    }

    /// Creates a set containing the distinct elements of `elements`.
    ///
    /// The table is sized for `elements.len()` up front, so building the set
    /// allocates once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use utilkit::collections::Set;
    ///
    /// let set = Set::from_slice(&[1, 1, 2, 3, 3]);
    /// assert_eq!(set.len(), 3);
    /// ```
    pub fn from_slice(elements: &[T]) -> Self
    where
        T: Clone,
    {
        let mut set = Self::with_capacity(elements.len());
        set.add_all(elements);
        set
    }
}

impl<T, S> Set<T, S> {
    /// Creates an empty set which will use `hasher` to hash its elements.
    #[inline]
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            inner: HashSet::with_hasher(hasher),
        }
    }

    /// Creates an empty set with room for `capacity` elements, hashed with `hasher`.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            inner: HashSet::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of elements the set can hold without reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns a reference to the set's hasher.
    #[inline]
    #[must_use]
    pub fn hasher(&self) -> &S {
        self.inner.hasher()
    }

    /// Removes every element. The allocated capacity is kept for reuse.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use utilkit::collections::Set;
    ///
    /// let mut set = Set::from_slice(&[1, 2, 3]);
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Returns a lazy iterator over the elements, in unspecified order.
    ///
    /// The iterator borrows the set, so the set cannot be modified until the
    /// iterator is dropped. Each call starts a fresh pass over the elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use utilkit::collections::Set;
    ///
    /// let set = Set::from_slice(&[1, 2, 3]);
    /// let sum: i32 = set.iter().sum();
    /// assert_eq!(sum, 6);
    /// ```
    #[must_use]
    pub fn iter(&self) -> SetIterator<'_, T> {
        SetIterator {
            inner: self.inner.iter(),
        }
    }
}

impl<T: Hash + Eq, S: BuildHasher> Set<T, S> {
    /// Returns `true` if the set contains `element`.
    ///
    /// The element may be any borrowed form of the set's element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use utilkit::collections::Set;
    ///
    /// let set = Set::from_slice(&["hello".to_string()]);
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("world"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(element)
    }

    /// Adds `element` to the set. Adding an element that is already present
    /// leaves the set unchanged.
    pub fn add(&mut self, element: T) {
        self.inner.insert(element);
    }

    /// Adds every element of a finite sequence. An unbounded sequence never
    /// returns.
    pub fn add_all_seq<I: IntoIterator<Item = T>>(&mut self, sequence: I) {
        for element in sequence {
            self.add(element);
        }
    }

    /// Removes `element` from the set if present; otherwise does nothing.
    pub fn remove<Q>(&mut self, element: &Q)
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(element);
    }

    /// Removes every element of `elements` that is present in the set.
    pub fn remove_all(&mut self, elements: &[T]) {
        for element in elements {
            self.inner.remove(element);
        }
    }

    /// Removes every element produced by a finite sequence. An unbounded
    /// sequence never returns.
    pub fn remove_all_seq<I: IntoIterator<Item = T>>(&mut self, sequence: I) {
        for element in sequence {
            self.inner.remove(&element);
        }
    }

    /// Removes every element of `other` from the set. `other` is only read.
    pub fn remove_all_set<S2>(&mut self, other: &Set<T, S2>) {
        for element in other {
            self.inner.remove(element);
        }
    }

    /// Returns `true` if every element of `self` is also in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        if self.len() > other.len() {
            return false;
        }
        self.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if every element of `other` is also in `self`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` and `other` have no elements in common.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (outer, inner) = outer_and_inner(self, other);
        !outer.iter().any(|element| inner.contains(element))
    }
}

impl<T: Hash + Eq + Clone, S: BuildHasher> Set<T, S> {
    /// Adds every element of `elements`.
    pub fn add_all(&mut self, elements: &[T]) {
        self.inner.reserve(elements.len());
        for element in elements {
            self.add(element.clone());
        }
    }

    /// Adds every element of `other`. `other` is only read.
    pub fn add_all_set<S2>(&mut self, other: &Set<T, S2>) {
        self.inner.reserve(other.len());
        for element in other {
            self.add(element.clone());
        }
    }

    /// Returns the elements as a vector, in unspecified order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use utilkit::collections::Set;
    ///
    /// let set = Set::from_slice(&[3, 1, 2]);
    /// let mut elements = set.to_vec();
    /// elements.sort_unstable();
    /// assert_eq!(elements, vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.inner.iter().cloned().collect()
    }
}

impl<T: Hash + Eq + Clone, S: BuildHasher + Default> Set<T, S> {
    /// Returns a new set containing the elements present in both sets.
    ///
    /// If either set is empty the result is empty and nothing is iterated.
    /// Otherwise the smaller set is iterated and each element is looked up in
    /// the larger one, so the cost is O(min(n, m)).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use utilkit::collections::Set;
    ///
    /// let set_a = Set::from_slice(&[1, 2, 3]);
    /// let set_b = Set::from_slice(&[2, 3, 4]);
    ///
    /// let intersection = set_a.intersect(&set_b);
    /// assert_eq!(intersection, Set::from_slice(&[2, 3]));
    /// ```
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::default();
        }

        let (outer, inner) = outer_and_inner(self, other);

        // The intersection can never be larger than the outer set.
        let mut intersection = Self::with_capacity_and_hasher(outer.len(), S::default());
        for element in outer {
            if inner.contains(element) {
                intersection.add(element.clone());
            }
        }
        intersection
    }

    /// Returns a new set containing the elements present in either set.
    ///
    /// The result is sized for `self.len() + other.len()`, which is exact
    /// only when the sets are disjoint.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use utilkit::collections::Set;
    ///
    /// let set_a = Set::from_slice(&[1, 2]);
    /// let set_b = Set::from_slice(&[2, 3]);
    ///
    /// assert_eq!(set_a.union(&set_b).len(), 3);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut union = Self::with_capacity_and_hasher(self.len() + other.len(), S::default());
        union.add_all_set(self);
        union.add_all_set(other);
        union
    }

    /// Returns a new set containing the elements of `self` that are not in `other`.
    ///
    /// The result is always a fresh set: it equals `self` when `other` is
    /// empty and is empty when `self` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use utilkit::collections::Set;
    ///
    /// let set_a = Set::from_slice(&[1, 2, 3]);
    /// let set_b = Set::from_slice(&[2, 3, 4]);
    /// let empty = Set::new();
    ///
    /// assert_eq!(set_a.difference(&set_b), Set::from_slice(&[1]));
    /// assert_eq!(set_a.difference(&empty), set_a);
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        if self.is_empty() {
            return Self::default();
        }

        let mut difference = Self::with_capacity_and_hasher(self.len(), S::default());
        if other.is_empty() {
            difference.add_all_set(self);
            return difference;
        }

        for element in self {
            if !other.contains(element) {
                difference.add(element.clone());
            }
        }
        difference
    }

    /// Returns a new set containing the elements present in exactly one of the sets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use utilkit::collections::Set;
    ///
    /// let set_a = Set::from_slice(&[1, 2, 3]);
    /// let set_b = Set::from_slice(&[2, 3, 4]);
    ///
    /// assert_eq!(set_a.symmetric_difference(&set_b), Set::from_slice(&[1, 4]));
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut result = self.difference(other);
        for element in other {
            if !self.contains(element) {
                result.add(element.clone());
            }
        }
        result
    }
}

/// Orders two sets as `(outer, inner)`: the outer set is the one iterated
/// and is always the smaller, since lookups in the inner set are O(1).
fn outer_and_inner<'a, T, S>(
    first: &'a Set<T, S>,
    second: &'a Set<T, S>,
) -> (&'a Set<T, S>, &'a Set<T, S>) {
    if first.len() <= second.len() {
        (first, second)
    } else {
        (second, first)
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// A borrowing iterator over the elements of a [`Set`].
pub struct SetIterator<'a, T> {
    inner: hash_set::Iter<'a, T>,
}

impl<'a, T> Iterator for SetIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SetIterator<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for SetIterator<'_, T> {}

impl<T> Clone for SetIterator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// An owning iterator over the elements of a [`Set`].
pub struct SetIntoIterator<T> {
    inner: hash_set::IntoIter<T>,
}

impl<T> Iterator for SetIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SetIntoIterator<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for SetIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T: Clone, S: Clone> Clone for Set<T, S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T, S: Default> Default for Set<T, S> {
    #[inline]
    fn default() -> Self {
        Self {
            inner: HashSet::default(),
        }
    }
}

impl<T: Hash + Eq, S: BuildHasher + Default> FromIterator<T> for Set<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.add_all_seq(iter);
        set
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for Set<T, RandomState> {
    fn from(elements: [T; N]) -> Self {
        let mut set = Self::with_capacity(N);
        set.add_all_seq(elements);
        set
    }
}

impl<T: Hash + Eq, S: BuildHasher> Extend<T> for Set<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all_seq(iter);
    }
}

impl<'a, T: Hash + Eq + Copy + 'a, S: BuildHasher> Extend<&'a T> for Set<T, S> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.add_all_seq(iter.into_iter().copied());
    }
}

impl<T, S> IntoIterator for Set<T, S> {
    type Item = T;
    type IntoIter = SetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        SetIntoIterator {
            inner: self.inner.into_iter(),
        }
    }
}

impl<'a, T, S> IntoIterator for &'a Set<T, S> {
    type Item = &'a T;
    type IntoIter = SetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Hash + Eq, S: BuildHasher> PartialEq for Set<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Hash + Eq, S: BuildHasher> Eq for Set<T, S> {}

impl<T: fmt::Debug, S> fmt::Debug for Set<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, S> fmt::Display for Set<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// No internal locking: thread-safety follows the element type.
static_assertions::assert_impl_all!(Set<i32>: Send, Sync);
static_assertions::assert_impl_all!(Set<String>: Send, Sync);
static_assertions::assert_not_impl_any!(Set<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, S> serde::Serialize for Set<T, S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SetVisitor<T, S> {
    marker: std::marker::PhantomData<(T, S)>,
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::de::Visitor<'de> for SetVisitor<T, S>
where
    T: serde::Deserialize<'de> + Hash + Eq,
    S: BuildHasher + Default,
{
    type Value = Set<T, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // The size hint comes from untrusted input, so it only caps the preallocation.
        let capacity = seq.size_hint().unwrap_or(0).min(4096);
        let mut set = Set::with_capacity_and_hasher(capacity, S::default());
        while let Some(element) = seq.next_element()? {
            set.add(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::Deserialize<'de> for Set<T, S>
where
    T: serde::Deserialize<'de> + Hash + Eq,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SetVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
