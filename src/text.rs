//! String helpers.

/// Shortens `text` so that it ends on a word boundary, appending `...`.
///
/// Characters are counted from the start. Once `max_length` characters have
/// been counted, the text is cut at the last whitespace seen so far. Text that
/// is shorter than `max_length`, or that has no whitespace before the limit
/// is reached, is returned unchanged.
///
/// # Examples
///
/// ```rust
/// use utilkit::text::truncate_whole_words;
///
/// assert_eq!(truncate_whole_words("the quick brown fox", 12), "the quick...");
/// assert_eq!(truncate_whole_words("short", 12), "short");
/// assert_eq!(truncate_whole_words("unbreakable", 4), "unbreakable");
/// ```
#[must_use]
pub fn truncate_whole_words(text: &str, max_length: usize) -> String {
    let mut last_whitespace = None;
    for (count, (index, character)) in text.char_indices().enumerate() {
        if character.is_whitespace() {
            last_whitespace = Some(index);
        }
        if count + 1 >= max_length {
            if let Some(cut) = last_whitespace {
                return format!("{}...", &text[..cut]);
            }
        }
    }
    text.to_string()
}

/// Splits `text` on every occurrence of any character in `separators`,
/// dropping empty fields.
///
/// # Examples
///
/// ```rust
/// use utilkit::text::split_any;
///
/// assert_eq!(split_any("a,b;;c", ",;"), vec!["a", "b", "c"]);
/// assert!(split_any(",,", ",").is_empty());
/// ```
#[must_use]
pub fn split_any<'a>(text: &'a str, separators: &str) -> Vec<&'a str> {
    text.split(|character: char| separators.contains(character))
        .filter(|field| !field.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("hello world again", 8, "hello...")]
    #[case("hello world again", 13, "hello world...")]
    #[case("hello world", 100, "hello world")]
    #[case("", 3, "")]
    #[case("nospaces", 2, "nospaces")]
    #[case("a b", 0, "a...")]
    fn test_truncate_whole_words(
        #[case] text: &str,
        #[case] max_length: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(truncate_whole_words(text, max_length), expected);
    }

    #[rstest]
    fn test_truncate_counts_characters_not_bytes() {
        assert_eq!(truncate_whole_words("ça va très bien", 9), "ça va...");
    }

    #[rstest]
    #[case("a b\tc", " \t", vec!["a", "b", "c"])]
    #[case("  leading", " ", vec!["leading"])]
    #[case("none", ",", vec!["none"])]
    #[case("", ",", vec![])]
    fn test_split_any(#[case] text: &str, #[case] separators: &str, #[case] expected: Vec<&str>) {
        assert_eq!(split_any(text, separators), expected);
    }
}
