//! Identification of the handler that emits a telegram.

use std::{borrow::Cow, fmt};

/// The type and operation on whose behalf a pipeline logs.
///
/// Call sites pass this explicitly; the [`caller_context!`](crate::caller_context)
/// macro fills the type from `module_path!()`.
///
/// # Examples
///
/// ```
/// use response_pipeline::{CallerContext, caller_context};
///
/// let explicit = CallerContext::new("UserController", "show");
/// assert_eq!(explicit.to_string(), "UserController::show");
///
/// let here = caller_context!("show");
/// assert_eq!(here.operation(), "show");
/// assert!(!here.type_name().is_empty());
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct CallerContext {
    type_name: Cow<'static, str>,
    operation: Cow<'static, str>,
}

impl CallerContext {
    /// Operation name used by [`CallerContext::anonymous`].
    pub const ANONYMOUS_OPERATION: &'static str = "anonymous";

    /// Build a context from a type and operation name.
    #[must_use]
    pub fn new(
        type_name: impl Into<Cow<'static, str>>,
        operation: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            operation: operation.into(),
        }
    }

    /// Context used when the caller did not identify itself.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self {
            type_name: Cow::Borrowed(env!("CARGO_PKG_NAME")),
            operation: Cow::Borrowed(Self::ANONYMOUS_OPERATION),
        }
    }

    /// Name of the calling type or module.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Name of the calling operation.
    #[must_use]
    pub fn operation(&self) -> &str {
        &self.operation
    }
}

impl Default for CallerContext {
    fn default() -> Self {
        Self::anonymous()
    }
}

impl fmt::Display for CallerContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.type_name, self.operation)
    }
}

/// Build a [`CallerContext`] for the current module and the named operation.
#[macro_export]
macro_rules! caller_context {
    ($operation:expr) => {
        $crate::CallerContext::new(::core::module_path!(), $operation)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macro_uses_current_module() {
        let ctx = crate::caller_context!("lookup");
        assert_eq!(ctx.type_name(), module_path!());
        assert_eq!(ctx.operation(), "lookup");
    }

    #[test]
    fn default_is_anonymous() {
        let ctx = CallerContext::default();
        assert_eq!(ctx.operation(), CallerContext::ANONYMOUS_OPERATION);
        assert_eq!(ctx, CallerContext::anonymous());
    }
}
