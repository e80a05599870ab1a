//! Default [`TelegramLogger`] backed by `tracing`.

use std::error::Error;

use super::{
    CallerContext, EXCEPTION_END, EXCEPTION_START, TELEGRAM_END, TELEGRAM_START, TelegramLevel,
    TelegramLogger, TelegramRecord, consts::NEWLINE,
};
use crate::TelegramConfig;

/// `tracing::event!` needs a constant level, so dispatch on ours.
macro_rules! telegram_event {
    ($level:expr, $($fields:tt)+) => {
        match $level {
            TelegramLevel::Error => tracing::error!($($fields)+),
            TelegramLevel::Warn => tracing::warn!($($fields)+),
            TelegramLevel::Info => tracing::info!($($fields)+),
            TelegramLevel::Trace => tracing::trace!($($fields)+),
        }
    };
}

/// Emits one `tracing` event per telegram.
///
/// Events carry the structured fields `class_name`, `method_name`,
/// `log_code`, `log_message` and `json_body`. Failures reported through
/// [`TelegramLogger::record_failure`] are always emitted at error level with
/// the error chain in `err_stack_trace`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TracingLogger {
    level: TelegramLevel,
    banners: bool,
}

impl TracingLogger {
    /// Logger emitting at `level`, framing bodies with banners when `banners`
    /// is set.
    #[must_use]
    pub const fn new(level: TelegramLevel, banners: bool) -> Self {
        Self { level, banners }
    }

    /// Logger configured from a [`TelegramConfig`].
    #[must_use]
    pub const fn from_config(config: &TelegramConfig) -> Self {
        Self::new(config.level, config.banners)
    }

    /// Level at which telegrams are emitted.
    #[must_use]
    pub const fn level(&self) -> TelegramLevel {
        self.level
    }

    fn frame(&self, start: &str, body: &str, end: &str) -> String {
        if self.banners {
            [start, body, end].join(NEWLINE)
        } else {
            body.to_owned()
        }
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new(TelegramLevel::default(), true)
    }
}

impl TelegramLogger for TracingLogger {
    fn record(&self, record: &TelegramRecord<'_>) {
        let body = self.frame(TELEGRAM_START, record.payload(), TELEGRAM_END);
        telegram_event!(
            self.level,
            prefix = self.level.prefix(),
            class_name = record.caller().type_name(),
            method_name = record.caller().operation(),
            log_code = record.code(),
            log_message = record.message(),
            json_body = %body,
            "telegram"
        );
    }

    fn record_failure(&self, caller: &CallerContext, error: &(dyn Error + 'static)) {
        let trace = self.frame(EXCEPTION_START, &error_chain(error), EXCEPTION_END);
        tracing::error!(
            prefix = TelegramLevel::Error.prefix(),
            class_name = caller.type_name(),
            method_name = caller.operation(),
            err_stack_trace = %trace,
            "handled pipeline failure"
        );
    }
}

/// Render `error` and each of its sources on its own line.
fn error_chain(error: &(dyn Error + 'static)) -> String {
    let mut lines = vec![error.to_string()];
    let mut source = error.source();
    while let Some(cause) = source {
        lines.push(format!("caused by: {cause}"));
        source = cause.source();
    }
    lines.join(NEWLINE)
}
