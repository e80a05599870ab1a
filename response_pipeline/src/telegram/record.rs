//! The record handed to loggers and the logger contract itself.

use std::error::Error;

use super::CallerContext;

/// One telegram: code, message, caller and the serialized payload.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TelegramRecord<'a> {
    code: Option<&'a str>,
    message: Option<&'a str>,
    caller: &'a CallerContext,
    payload: &'a str,
}

impl<'a> TelegramRecord<'a> {
    /// Assemble a record.
    #[must_use]
    pub const fn new(
        code: Option<&'a str>,
        message: Option<&'a str>,
        caller: &'a CallerContext,
        payload: &'a str,
    ) -> Self {
        Self {
            code,
            message,
            caller,
            payload,
        }
    }

    /// Log code, if one was supplied.
    #[must_use]
    pub const fn code(&self) -> Option<&'a str> {
        self.code
    }

    /// Log message, if one was supplied.
    #[must_use]
    pub const fn message(&self) -> Option<&'a str> {
        self.message
    }

    /// Handler on whose behalf the record was written.
    #[must_use]
    pub const fn caller(&self) -> &'a CallerContext {
        self.caller
    }

    /// Serialized payload.
    #[must_use]
    pub const fn payload(&self) -> &'a str {
        self.payload
    }
}

/// Sink for telegram records.
///
/// Implementations are called synchronously from the pipeline and must not
/// panic for ordinary input. Payload serialization happens before the
/// logger is called, so a logger never sees a half-rendered payload.
pub trait TelegramLogger: Send + Sync {
    /// Write a telegram record.
    fn record(&self, record: &TelegramRecord<'_>);

    /// Write a fatal failure that a boundary handler has caught.
    ///
    /// The default implementation discards the failure.
    fn record_failure(&self, _caller: &CallerContext, _error: &(dyn Error + 'static)) {}
}
