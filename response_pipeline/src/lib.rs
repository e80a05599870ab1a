//! Fluent response-processing pipeline for request handlers.
//!
//! A handler seeds a [`Pipeline`] from a value, a supplier or a backing
//! operation's [`Outcome`], chains transformation, validation and telegram
//! logging stages, then extracts the result with [`Pipeline::apply`].
//! Business error codes accumulate in an [`ErrorSet`] alongside the value
//! without interrupting the chain; fatal failures surface as
//! [`PipelineError`].
//!
//! ```
//! use response_pipeline::{ErrorSet, Outcome, PipelineContext, PipelineResult, caller_context};
//!
//! fn find_user(id: u32) -> Outcome<String> {
//!     Outcome::with_errors(format!("user-{id}"), ErrorSet::with_codes("req-7", ["W_STALE"]))
//! }
//!
//! # fn main() -> PipelineResult<()> {
//! let (body, errors) = PipelineContext::new(caller_context!("show_user"))
//!     .with(42)
//!     .execute_service_with(|id| find_user(*id))
//!     .map(|name| name.to_uppercase())
//!     .log(Some("T100"), Some("response"))?
//!     .into_parts();
//! assert_eq!(body.as_deref(), Some("USER-42"));
//! assert_eq!(errors.map(|e| e.codes().to_vec()), Some(vec!["W_STALE".to_owned()]));
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod error_set;
mod outcome;
mod pipeline;
mod result_ext;
mod telegram;
pub mod util;

pub use config::{ENV_PREFIX, TelegramConfig};
pub use error::{BoxedSource, NullStage, PipelineError, PipelineResult};
pub use error_set::ErrorSet;
pub use outcome::Outcome;
pub use pipeline::{Flow, Pipeline, PipelineContext};
pub use result_ext::PipelineResultExt;
pub use telegram::{
    CallerContext, EXCEPTION_END, EXCEPTION_START, JsonSerializer, TELEGRAM_END, TELEGRAM_START,
    TelegramLevel, TelegramLogger, TelegramRecord, TracingLogger,
};
