//! Ordered, append-only business error codes.
//!
//! An [`ErrorSet`] travels next to a pipeline value. Codes are kept in the
//! order they were first reported and are never removed or reordered, so a
//! response can list every problem the backing operations encountered.

use serde::{Deserialize, Serialize};

/// Business error codes plus the identifier correlating them to a request.
///
/// # Examples
///
/// ```
/// use response_pipeline::ErrorSet;
///
/// let mut errors = ErrorSet::new("req-1");
/// errors.push("E001");
/// errors.push("E002");
/// assert_eq!(errors.codes(), ["E001", "E002"]);
/// assert_eq!(errors.id(), "req-1");
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ErrorSet {
    codes: Vec<String>,
    id: String,
}

impl ErrorSet {
    /// Create an empty set for the given identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            codes: Vec::new(),
            id: id.into(),
        }
    }

    /// Create a set pre-populated with `codes`, preserving their order.
    ///
    /// # Examples
    ///
    /// ```
    /// use response_pipeline::ErrorSet;
    /// let errors = ErrorSet::with_codes("req-9", ["E1", "E1"]);
    /// assert_eq!(errors.len(), 2);
    /// ```
    #[must_use]
    pub fn with_codes<I, S>(id: impl Into<String>, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
            id: id.into(),
        }
    }

    /// Append a single code. Duplicates are kept.
    pub fn push(&mut self, code: impl Into<String>) -> &mut Self {
        self.codes.push(code.into());
        self
    }

    /// Append every code yielded by `codes` in iteration order.
    pub fn extend<I, S>(&mut self, codes: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.codes.extend(codes.into_iter().map(Into::into));
        self
    }

    /// Codes in first-reported order.
    #[must_use]
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    /// Identifier correlating the codes to a request.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Number of recorded codes, duplicates included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns `true` when no code has been recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Returns `true` when `code` has been recorded at least once.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c == code)
    }

    /// Merge two optional sets.
    ///
    /// The operation is total: either side may be absent. Codes from
    /// `incoming` are appended after those of `current`, and the identifier
    /// of `current` is kept when both sets exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use response_pipeline::ErrorSet;
    ///
    /// let first = Some(ErrorSet::with_codes("req-1", ["A"]));
    /// let second = Some(ErrorSet::with_codes("req-2", ["B"]));
    /// let merged = ErrorSet::merge(first, second).unwrap_or_default();
    /// assert_eq!(merged.codes(), ["A", "B"]);
    /// assert_eq!(merged.id(), "req-1");
    ///
    /// assert_eq!(ErrorSet::merge(None, None), None);
    /// ```
    #[must_use]
    pub fn merge(current: Option<Self>, incoming: Option<Self>) -> Option<Self> {
        match (current, incoming) {
            (Some(mut existing), Some(next)) => {
                existing.codes.extend(next.codes);
                Some(existing)
            }
            (existing @ Some(_), None) => existing,
            (None, next) => next,
        }
    }
}

impl<'a> IntoIterator for &'a ErrorSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn set(id: &str, codes: &[&str]) -> ErrorSet {
        ErrorSet::with_codes(id, codes.iter().copied())
    }

    #[rstest]
    #[case(None, None, None)]
    #[case(Some(set("a", &["E1"])), None, Some(set("a", &["E1"])))]
    #[case(None, Some(set("b", &["E2"])), Some(set("b", &["E2"])))]
    #[case(Some(set("a", &["E1"])), Some(set("b", &["E2"])), Some(set("a", &["E1", "E2"])))]
    fn merge_is_total(
        #[case] current: Option<ErrorSet>,
        #[case] incoming: Option<ErrorSet>,
        #[case] expected: Option<ErrorSet>,
    ) {
        assert_eq!(ErrorSet::merge(current, incoming), expected);
    }

    #[test]
    fn merge_keeps_duplicates_in_order() {
        let merged = ErrorSet::merge(Some(set("r", &["X", "Y"])), Some(set("r", &["X"])));
        assert_eq!(merged.map(|e| e.codes().to_vec()), Some(vec![
            "X".to_owned(),
            "Y".to_owned(),
            "X".to_owned()
        ]));
    }

    #[test]
    fn push_and_extend_append() {
        let mut errors = ErrorSet::new("req");
        errors.push("A").extend(["B", "C"]);
        assert_eq!(errors.codes(), ["A", "B", "C"]);
        assert!(errors.contains("B"));
        assert!(!errors.contains("D"));
        assert_eq!((&errors).into_iter().count(), 3);
    }

    #[test]
    fn serializes_codes_and_id() -> serde_json::Result<()> {
        let json = serde_json::to_value(set("req-1", &["E1"]))?;
        assert_eq!(json, serde_json::json!({ "codes": ["E1"], "id": "req-1" }));
        Ok(())
    }
}
