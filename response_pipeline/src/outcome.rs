//! Results returned by backing operations.

use serde::{Deserialize, Serialize};

use crate::ErrorSet;

/// A value produced by a backing operation together with any business
/// errors it reported.
///
/// Backing operations encode expected failures in the error set and keep
/// returning a value; only unexpected failures should surface as `Err`.
///
/// # Examples
///
/// ```
/// use response_pipeline::{ErrorSet, Outcome};
///
/// let out = Outcome::with_errors("partial", ErrorSet::with_codes("req-1", ["W010"]));
/// assert!(out.has_errors());
/// let (value, errors) = out.into_parts();
/// assert_eq!(value, "partial");
/// assert_eq!(errors.map(|e| e.len()), Some(1));
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Outcome<T> {
    value: T,
    errors: Option<ErrorSet>,
}

impl<T> Outcome<T> {
    /// Build an outcome from its parts.
    #[must_use]
    pub const fn new(value: T, errors: Option<ErrorSet>) -> Self {
        Self { value, errors }
    }

    /// Build an outcome that reported no business errors.
    #[must_use]
    pub const fn success(value: T) -> Self {
        Self::new(value, None)
    }

    /// Build an outcome carrying business errors.
    #[must_use]
    pub const fn with_errors(value: T, errors: ErrorSet) -> Self {
        Self::new(value, Some(errors))
    }

    /// Borrow the produced value.
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Borrow the reported errors, if any.
    #[must_use]
    pub const fn errors(&self) -> Option<&ErrorSet> {
        self.errors.as_ref()
    }

    /// Returns `true` when the error set exists and holds at least one code.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|e| !e.is_empty())
    }

    /// Split the outcome into its value and optional error set.
    #[must_use]
    pub fn into_parts(self) -> (T, Option<ErrorSet>) {
        (self.value, self.errors)
    }

    /// Transform the value while keeping the error set.
    #[must_use]
    pub fn map<R>(self, f: impl FnOnce(T) -> R) -> Outcome<R> {
        Outcome::new(f(self.value), self.errors)
    }
}

impl<T> From<T> for Outcome<T> {
    fn from(value: T) -> Self {
        Self::success(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_has_no_errors() {
        let out = Outcome::success(3);
        assert_eq!(out.value(), &3);
        assert!(out.errors().is_none());
        assert!(!out.has_errors());
    }

    #[test]
    fn empty_error_set_is_not_an_error() {
        let out = Outcome::with_errors((), ErrorSet::new("req"));
        assert!(out.errors().is_some());
        assert!(!out.has_errors());
    }

    #[test]
    fn map_keeps_errors() {
        let out = Outcome::with_errors(2, ErrorSet::with_codes("r", ["E"])).map(|v| v * 10);
        assert_eq!(out.value(), &20);
        assert_eq!(out.errors().map(ErrorSet::codes), Some(&["E".to_owned()][..]));
    }
}
