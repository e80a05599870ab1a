//! A [`TelegramLogger`] that keeps every record in memory.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use response_pipeline::{CallerContext, PipelineContext};
//! use test_helpers::RecordingLogger;
//!
//! let logger = Arc::new(RecordingLogger::default());
//! let ctx = PipelineContext::new(CallerContext::new("Demo", "run"))
//!     .with_logger(logger.clone());
//! let _logged = ctx.with(1).log(Some("C1"), None);
//! assert_eq!(logger.telegrams().len(), 1);
//! ```

use std::error::Error;

use parking_lot::Mutex;
use response_pipeline::{CallerContext, TelegramLogger, TelegramRecord};

/// Owned copy of a [`TelegramRecord`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CapturedTelegram {
    /// Log code, if any.
    pub code: Option<String>,
    /// Log message, if any.
    pub message: Option<String>,
    /// Caller that emitted the record.
    pub caller: CallerContext,
    /// Serialized payload.
    pub payload: String,
}

/// Owned copy of a failure passed to [`TelegramLogger::record_failure`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CapturedFailure {
    /// Caller that reported the failure.
    pub caller: CallerContext,
    /// Rendered error message.
    pub message: String,
}

/// Records telegrams and failures for later inspection.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    telegrams: Mutex<Vec<CapturedTelegram>>,
    failures: Mutex<Vec<CapturedFailure>>,
}

impl RecordingLogger {
    /// Snapshot of the telegrams recorded so far.
    #[must_use]
    pub fn telegrams(&self) -> Vec<CapturedTelegram> {
        self.telegrams.lock().clone()
    }

    /// Payloads of the telegrams recorded so far, in order.
    #[must_use]
    pub fn payloads(&self) -> Vec<String> {
        self.telegrams
            .lock()
            .iter()
            .map(|t| t.payload.clone())
            .collect()
    }

    /// Snapshot of the failures recorded so far.
    #[must_use]
    pub fn failures(&self) -> Vec<CapturedFailure> {
        self.failures.lock().clone()
    }
}

impl TelegramLogger for RecordingLogger {
    fn record(&self, record: &TelegramRecord<'_>) {
        self.telegrams.lock().push(CapturedTelegram {
            code: record.code().map(str::to_owned),
            message: record.message().map(str::to_owned),
            caller: record.caller().clone(),
            payload: record.payload().to_owned(),
        });
    }

    fn record_failure(&self, caller: &CallerContext, error: &(dyn Error + 'static)) {
        self.failures.lock().push(CapturedFailure {
            caller: caller.clone(),
            message: error.to_string(),
        });
    }
}
