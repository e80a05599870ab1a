//! Telegram logging: the collaborators a pipeline calls when it records a
//! structured snapshot of a request or response.
//!
//! A telegram record carries an optional code and message, the
//! [`CallerContext`] of the handler that produced it, and the payload
//! rendered by the [`JsonSerializer`]. Records are handed synchronously to a
//! [`TelegramLogger`]; the default [`TracingLogger`] turns them into
//! `tracing` events.

mod caller;
mod consts;
mod level;
mod record;
mod serializer;
mod tracing_logger;

pub use caller::CallerContext;
pub use consts::{EXCEPTION_END, EXCEPTION_START, TELEGRAM_END, TELEGRAM_START};
pub use level::TelegramLevel;
pub use record::{TelegramLogger, TelegramRecord};
pub use serializer::JsonSerializer;
pub use tracing_logger::TracingLogger;
