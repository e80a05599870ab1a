//! Small predicates shared by request handlers.

use std::sync::LazyLock;

use regex::Regex;

/// Word characters are ASCII-only, so non-ASCII hosts and paths are rejected.
static URI_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^(http|https)://([A-Za-z0-9_-]+\.)+[A-Za-z0-9_-]+(/[A-Za-z0-9_\-./?%&=]*)?$")
        .ok()
});

/// Returns `true` for `None` or an empty string.
///
/// ```
/// use response_pipeline::util::is_null_or_empty;
/// assert!(is_null_or_empty(None));
/// assert!(is_null_or_empty(Some("")));
/// assert!(!is_null_or_empty(Some(" ")));
/// ```
#[must_use]
pub fn is_null_or_empty(input: Option<&str>) -> bool {
    input.is_none_or(str::is_empty)
}

/// Returns `true` for `None` or a string made only of whitespace.
#[must_use]
pub fn is_null_or_blank(input: Option<&str>) -> bool {
    input.is_none_or(|s| s.trim().is_empty())
}

/// Replace `None` with the empty string.
#[must_use]
pub fn convert_null_to_empty(input: Option<&str>) -> &str {
    input.unwrap_or_default()
}

/// Returns `true` when `subject` is an absolute `http` or `https` URL.
///
/// ```
/// use response_pipeline::util::is_uri;
/// assert!(is_uri("https://example.com/api/v1?q=1"));
/// assert!(!is_uri("ftp://example.com"));
/// ```
#[must_use]
pub fn is_uri(subject: &str) -> bool {
    URI_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(subject))
}

/// Iterate over `items`, yielding nothing when the list is absent.
pub fn iter_or_empty<T>(items: Option<&[T]>) -> std::slice::Iter<'_, T> {
    items.unwrap_or_default().iter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, true)]
    #[case(Some(""), true)]
    #[case(Some("   "), true)]
    #[case(Some("test method"), false)]
    fn blank_detection(#[case] input: Option<&str>, #[case] expected: bool) {
        assert_eq!(is_null_or_blank(input), expected);
    }

    #[rstest]
    #[case(None, "")]
    #[case(Some(""), "")]
    #[case(Some("kept"), "kept")]
    fn null_becomes_empty(#[case] input: Option<&str>, #[case] expected: &str) {
        assert_eq!(convert_null_to_empty(input), expected);
    }

    #[rstest]
    #[case("http://example.com", true)]
    #[case("https://api.example.co.jp/v1/users?id=3&x=%20", true)]
    #[case("https://localhost", false)]
    #[case("example.com", false)]
    #[case("https://exa mple.com", false)]
    #[case("https://例え.jp", false)]
    #[case("https://example.com/パス", false)]
    #[case("https://ünicode.example.com", false)]
    fn uri_detection(#[case] subject: &str, #[case] expected: bool) {
        assert_eq!(is_uri(subject), expected);
    }

    #[test]
    fn uri_pattern_compiles() {
        assert!(URI_PATTERN.is_some());
    }

    #[test]
    fn absent_list_iterates_nothing() {
        assert_eq!(iter_or_empty::<u8>(None).count(), 0);
        assert_eq!(iter_or_empty(Some(&[1, 2][..])).copied().sum::<i32>(), 3);
    }
}
