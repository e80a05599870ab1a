//! Collaborators shared by every stage of a pipeline.

use std::{fmt, sync::Arc};

use crate::{
    CallerContext, ErrorSet, JsonSerializer, PipelineError, PipelineResult, TelegramConfig,
    TelegramLogger, TelegramRecord, TracingLogger,
};

use super::{Flow, Pipeline};

/// Caller identity plus the logger and serializer a pipeline writes
/// telegrams through.
///
/// A context is the entry point of every chain: [`PipelineContext::start`],
/// [`PipelineContext::of`] and [`PipelineContext::with`] seed a
/// [`Pipeline`] that carries the context through each stage.
///
/// # Examples
///
/// ```
/// use response_pipeline::{PipelineContext, caller_context};
///
/// let doubled = PipelineContext::new(caller_context!("double"))
///     .of(|| 21)
///     .map(|n| n * 2)
///     .apply();
/// assert_eq!(doubled, Some(42));
/// ```
#[derive(Clone)]
pub struct PipelineContext {
    caller: CallerContext,
    logger: Arc<dyn TelegramLogger>,
    serializer: JsonSerializer,
}

impl PipelineContext {
    /// Context logging through [`TracingLogger`] with compact JSON payloads.
    #[must_use]
    pub fn new(caller: CallerContext) -> Self {
        Self {
            caller,
            logger: Arc::new(TracingLogger::default()),
            serializer: JsonSerializer::compact(),
        }
    }

    /// Context whose logger and serializer follow `config`.
    #[must_use]
    pub fn from_config(caller: CallerContext, config: &TelegramConfig) -> Self {
        let serializer = if config.pretty {
            JsonSerializer::pretty()
        } else {
            JsonSerializer::compact()
        };
        Self {
            caller,
            logger: Arc::new(TracingLogger::from_config(config)),
            serializer,
        }
    }

    /// Replace the telegram logger.
    #[must_use]
    pub fn with_logger(mut self, logger: Arc<dyn TelegramLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Replace the payload serializer.
    #[must_use]
    pub fn with_serializer(mut self, serializer: JsonSerializer) -> Self {
        self.serializer = serializer;
        self
    }

    /// Identity written into every telegram.
    #[must_use]
    pub const fn caller(&self) -> &CallerContext {
        &self.caller
    }

    /// Serializer used for telegram payloads.
    #[must_use]
    pub const fn serializer(&self) -> JsonSerializer {
        self.serializer
    }

    /// Forward a fatal failure to the logger.
    ///
    /// Boundary handlers call this after a chain returned `Err`; the pipeline
    /// itself never recovers from such failures.
    pub fn report(&self, error: &PipelineError) {
        self.logger.record_failure(&self.caller, error);
    }

    /// Begin a chain that has no value yet.
    ///
    /// The returned pipeline carries `()` and is typically followed by
    /// [`Pipeline::execute_service`]. Logging it writes `null`.
    pub fn start(self) -> Pipeline<()> {
        self.with(())
    }

    /// Begin a chain with the value produced by `supplier`.
    ///
    /// The supplier runs immediately.
    pub fn of<R>(self, supplier: impl FnOnce() -> R) -> Pipeline<R> {
        self.with(supplier())
    }

    /// Begin a chain with `input`.
    pub fn with<R>(self, input: R) -> Pipeline<R> {
        Pipeline::from_parts(
            Flow::Continuing {
                value: input,
                errors: None,
            },
            self,
        )
    }

    /// Begin a chain from a supplier whose result may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::NullResult`] when `supplier` yields `None`.
    pub fn try_of<R>(self, supplier: impl FnOnce() -> Option<R>) -> PipelineResult<Pipeline<R>> {
        supplier()
            .map(|value| self.with(value))
            .ok_or(PipelineError::null_result(crate::NullStage::Supplier))
    }

    /// Begin a chain from a value that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::NullResult`] when `input` is `None`.
    pub fn try_with<R>(self, input: Option<R>) -> PipelineResult<Pipeline<R>> {
        input
            .map(|value| self.with(value))
            .ok_or(PipelineError::null_result(crate::NullStage::Input))
    }

    pub(crate) fn emit(&self, code: Option<&str>, message: Option<&str>, payload: &str) {
        self.logger
            .record(&TelegramRecord::new(code, message, &self.caller, payload));
    }

    pub(crate) fn trace_halt(&self, errors: Option<&ErrorSet>) {
        tracing::debug!(
            caller = %self.caller,
            pending_errors = errors.map_or(0, ErrorSet::len),
            "pipeline halted by validation"
        );
    }
}

impl Default for PipelineContext {
    fn default() -> Self {
        Self::new(CallerContext::anonymous())
    }
}

impl fmt::Debug for PipelineContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineContext")
            .field("caller", &self.caller)
            .field("logger", &"<telegram logger>")
            .field("serializer", &self.serializer)
            .finish()
    }
}
