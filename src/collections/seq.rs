//! Lazy sequence helpers.
//!
//! A sequence is anything implementing [`IntoIterator`]. The adapters here
//! pull from their source only as far as the consumer asks, so an unbounded
//! source is fine as long as the consumer stops. [`join_seq`] consumes the
//! whole sequence and never returns for an unbounded one.

/// Lazily applies `function` to every element of `sequence`.
///
/// # Examples
///
/// ```rust
/// use utilkit::collections::map_seq;
///
/// let squares: Vec<u32> = map_seq(1.., |value: u32| value * value).take(3).collect();
/// assert_eq!(squares, vec![1, 4, 9]);
/// ```
pub fn map_seq<I, U, F>(sequence: I, function: F) -> impl Iterator<Item = U>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    sequence.into_iter().map(function)
}

/// Lazily keeps the elements of `sequence` for which `predicate` holds.
pub fn filter_seq<I, P>(sequence: I, predicate: P) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    sequence.into_iter().filter(predicate)
}

/// Converts every element with `transform` and joins the results with `separator`.
///
/// # Examples
///
/// ```rust
/// use utilkit::collections::join_seq;
///
/// let joined = join_seq(1..=3, "+", |value| value.to_string());
/// assert_eq!(joined, "1+2+3");
/// ```
pub fn join_seq<I, F>(sequence: I, separator: &str, transform: F) -> String
where
    I: IntoIterator,
    F: FnMut(I::Item) -> String,
{
    sequence
        .into_iter()
        .map(transform)
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_map_seq_is_lazy() {
        let calls = Cell::new(0);
        let mapped = map_seq(0..100, |value| {
            calls.set(calls.get() + 1);
            value + 1
        });
        assert_eq!(calls.get(), 0);

        let first_two: Vec<i32> = mapped.take(2).collect();
        assert_eq!(first_two, vec![1, 2]);
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn test_filter_seq_stops_with_consumer() {
        let first = filter_seq(1.., |value: &u64| value % 7 == 0).next();
        assert_eq!(first, Some(7));
    }

    #[rstest]
    fn test_join_seq_empty() {
        assert_eq!(join_seq(std::iter::empty::<i32>(), ",", |value| value.to_string()), "");
    }

    #[rstest]
    fn test_join_seq_chars() {
        assert_eq!(join_seq("abc".chars(), "/", String::from), "a/b/c");
    }
}
