//! Helpers over slices.
//!
//! Each helper borrows its input and returns a freshly allocated result.

/// Applies `function` to every element, returning the results in order.
///
/// # Examples
///
/// ```rust
/// use utilkit::collections::map;
///
/// let lengths = map(&["a", "bcd", ""], |word| word.len());
/// assert_eq!(lengths, vec![1, 3, 0]);
/// ```
pub fn map<T, U, F>(elements: &[T], function: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    elements.iter().map(function).collect()
}

/// Returns the elements for which `predicate` holds, in their original order.
///
/// # Examples
///
/// ```rust
/// use utilkit::collections::filter;
///
/// let evens = filter(&[1, 2, 3, 4], |value| value % 2 == 0);
/// assert_eq!(evens, vec![2, 4]);
/// ```
pub fn filter<T, P>(elements: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    elements
        .iter()
        .filter(|element| predicate(*element))
        .cloned()
        .collect()
}

/// Converts every element with `transform` and joins the results with `separator`.
///
/// # Examples
///
/// ```rust
/// use utilkit::collections::join;
///
/// let joined = join(&[1, 2, 3], ", ", |value| value.to_string());
/// assert_eq!(joined, "1, 2, 3");
/// ```
pub fn join<T, F>(elements: &[T], separator: &str, transform: F) -> String
where
    F: FnMut(&T) -> String,
{
    elements
        .iter()
        .map(transform)
        .collect::<Vec<_>>()
        .join(separator)
}
