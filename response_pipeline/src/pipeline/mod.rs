//! The response-processing pipeline.
//!
//! A [`Pipeline`] threads a value through backing-operation calls,
//! transformations, validation and telegram logging while accumulating a
//! parallel [`ErrorSet`]. Every stage consumes the pipeline and returns a new
//! one; nothing is mutated in place.
//!
//! Failures travel on two separate channels:
//!
//! - business errors are appended to the error set and never stop the chain;
//! - fatal failures (a mapping function, a backing operation or payload
//!   serialization failing) are returned as [`PipelineError`] from the
//!   `try_*` and logging stages.
//!
//! [`Pipeline::filter_or_halt`] adds a third outcome: a halted chain whose
//! value is gone but whose errors are kept. Halted pipelines skip every
//! value-consuming stage and [`Pipeline::apply`] returns `None`.
//!
//! # Examples
//!
//! ```
//! use response_pipeline::{ErrorSet, Outcome, Pipeline};
//!
//! let pipeline = Pipeline::start()
//!     .execute_service(Outcome::with_errors("ok", ErrorSet::with_codes("req-1", ["E1"])))
//!     .execute_service(Outcome::with_errors("done", ErrorSet::with_codes("req-1", ["E2"])));
//! assert_eq!(
//!     pipeline.errors().map(ErrorSet::codes),
//!     Some(&["E1".to_owned(), "E2".to_owned()][..])
//! );
//! assert_eq!(pipeline.apply(), Some("done"));
//! ```

mod context;
mod flow;

pub use context::PipelineContext;
pub use flow::Flow;

use serde::Serialize;

use crate::{BoxedSource, ErrorSet, Outcome, PipelineError, PipelineResult};

/// A value and its accumulated business errors, threaded through a chain of
/// stages.
#[derive(Clone, Debug)]
#[must_use = "a pipeline does nothing until `apply` extracts its value"]
pub struct Pipeline<T> {
    flow: Flow<T>,
    context: PipelineContext,
}

impl Pipeline<()> {
    /// Begin a valueless chain with the default context.
    ///
    /// See [`PipelineContext::start`].
    pub fn start() -> Self {
        PipelineContext::default().start()
    }
}

impl<T> Pipeline<T> {
    pub(crate) const fn from_parts(flow: Flow<T>, context: PipelineContext) -> Self {
        Self { flow, context }
    }

    /// Begin a chain with the default context from an eagerly evaluated
    /// supplier.
    ///
    /// ```
    /// use response_pipeline::Pipeline;
    /// assert_eq!(Pipeline::of(|| 5).map(|x| x * 2).apply(), Some(10));
    /// ```
    pub fn of(supplier: impl FnOnce() -> T) -> Self {
        PipelineContext::default().of(supplier)
    }

    /// Begin a chain with the default context from a literal value.
    pub fn with(input: T) -> Self {
        PipelineContext::default().with(input)
    }

    /// Run a backing operation's result into the chain.
    ///
    /// The outcome's errors are appended to the accumulated set, which may
    /// be absent on either side. On a continuing pipeline the outcome's value
    /// replaces the current one. A halted pipeline stays halted but still
    /// records the errors.
    pub fn execute_service<R>(self, outcome: Outcome<R>) -> Pipeline<R> {
        let (value, incoming) = outcome.into_parts();
        let Self { flow, context } = self;
        Pipeline::from_parts(flow.absorb(value, incoming), context)
    }

    /// Invoke a backing operation with the current value.
    ///
    /// `service` is not called on a halted pipeline.
    pub fn execute_service_with<R>(self, service: impl FnOnce(&T) -> Outcome<R>) -> Pipeline<R> {
        let Self { flow, context } = self;
        let next = match flow {
            Flow::Continuing { value, errors } => {
                let (produced, incoming) = service(&value).into_parts();
                Flow::Continuing {
                    value: produced,
                    errors: ErrorSet::merge(errors, incoming),
                }
            }
            Flow::Halted { errors } => Flow::Halted { errors },
        };
        Pipeline::from_parts(next, context)
    }

    /// Invoke a backing operation that may fail for infrastructure reasons.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Service`] when `service` returns `Err`. No
    /// retry is attempted.
    pub fn try_execute_service_with<R, E>(
        self,
        service: impl FnOnce(&T) -> Result<Outcome<R>, E>,
    ) -> PipelineResult<Pipeline<R>>
    where
        E: Into<BoxedSource>,
    {
        let Self { flow, context } = self;
        let next = match flow {
            Flow::Continuing { value, errors } => {
                let (produced, incoming) = service(&value)
                    .map_err(PipelineError::service)?
                    .into_parts();
                Flow::Continuing {
                    value: produced,
                    errors: ErrorSet::merge(errors, incoming),
                }
            }
            Flow::Halted { errors } => Flow::Halted { errors },
        };
        Ok(Pipeline::from_parts(next, context))
    }

    /// Transform the current value, keeping the accumulated errors.
    pub fn map<R>(self, f: impl FnOnce(T) -> R) -> Pipeline<R> {
        self.map_with_error(|value, _| f(value))
    }

    /// Transform the current value with a function that can fail.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Transform`] wrapping the error produced by `f`.
    pub fn try_map<R, E>(self, f: impl FnOnce(T) -> Result<R, E>) -> PipelineResult<Pipeline<R>>
    where
        E: Into<BoxedSource>,
    {
        self.try_map_with_error(|value, _| f(value))
    }

    /// Transform the current value while observing the accumulated errors.
    ///
    /// The errors are passed by reference and kept unchanged.
    ///
    /// ```
    /// use response_pipeline::{ErrorSet, Outcome, Pipeline};
    ///
    /// let status = Pipeline::start()
    ///     .execute_service(Outcome::with_errors(7, ErrorSet::with_codes("r", ["W1"])))
    ///     .map_with_error(|n, errors| match errors {
    ///         Some(e) if !e.is_empty() => format!("{n} with {} warning(s)", e.len()),
    ///         _ => n.to_string(),
    ///     })
    ///     .apply();
    /// assert_eq!(status.as_deref(), Some("7 with 1 warning(s)"));
    /// ```
    pub fn map_with_error<R>(self, f: impl FnOnce(T, Option<&ErrorSet>) -> R) -> Pipeline<R> {
        let Self { flow, context } = self;
        Pipeline::from_parts(flow.map(f), context)
    }

    /// Fallible counterpart of [`Pipeline::map_with_error`].
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Transform`] wrapping the error produced by `f`.
    pub fn try_map_with_error<R, E>(
        self,
        f: impl FnOnce(T, Option<&ErrorSet>) -> Result<R, E>,
    ) -> PipelineResult<Pipeline<R>>
    where
        E: Into<BoxedSource>,
    {
        let Self { flow, context } = self;
        let next = flow.try_map(f).map_err(PipelineError::transform)?;
        Ok(Pipeline::from_parts(next, context))
    }

    /// Keep the value when `predicate` accepts it; otherwise halt the chain.
    ///
    /// Halting is not an error: nothing is added to the error set and the
    /// accumulated errors are kept. Downstream stages see a halted pipeline
    /// and [`Pipeline::apply`] returns `None`.
    pub fn filter_or_halt(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        let Self { flow, context } = self;
        let next = match flow {
            Flow::Continuing { value, errors } => {
                if predicate(&value) {
                    Flow::Continuing { value, errors }
                } else {
                    context.trace_halt(errors.as_ref());
                    Flow::Halted { errors }
                }
            }
            halted @ Flow::Halted { .. } => halted,
        };
        Self::from_parts(next, context)
    }

    /// Write a telegram whose payload is `payload`.
    ///
    /// The pipeline's value and errors are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Serialization`] when `payload` cannot be
    /// serialized; the logger is not called in that case.
    pub fn log_output<V>(
        self,
        code: Option<&str>,
        message: Option<&str>,
        payload: &V,
    ) -> PipelineResult<Self>
    where
        V: Serialize + ?Sized,
    {
        let body = self.context.serializer().serialize(payload)?;
        self.context.emit(code, message, &body);
        Ok(self)
    }

    /// Write a telegram whose payload is the current value.
    ///
    /// A pipeline begun with [`Pipeline::start`] logs `null`, as does a
    /// halted one.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Serialization`] when the value cannot be
    /// serialized.
    pub fn log(self, code: Option<&str>, message: Option<&str>) -> PipelineResult<Self>
    where
        T: Serialize,
    {
        let body = self.context.serializer().serialize(&self.flow.value())?;
        self.context.emit(code, message, &body);
        Ok(self)
    }

    /// Borrow the current state.
    #[must_use]
    pub const fn flow(&self) -> &Flow<T> {
        &self.flow
    }

    /// Borrow the accumulated errors.
    #[must_use]
    pub const fn errors(&self) -> Option<&ErrorSet> {
        self.flow.errors()
    }

    /// Returns `true` when a validation step halted the chain.
    #[must_use]
    pub const fn is_halted(&self) -> bool {
        self.flow.is_halted()
    }

    /// Borrow the context shared by every stage.
    #[must_use]
    pub const fn context(&self) -> &PipelineContext {
        &self.context
    }

    /// Extract the final value, or `None` when the chain was halted.
    #[must_use]
    pub fn apply(self) -> Option<T> {
        self.flow.into_value()
    }

    /// Extract the final state, keeping the accumulated errors.
    #[must_use]
    pub fn into_flow(self) -> Flow<T> {
        self.flow
    }

    /// Extract the final value and the accumulated errors.
    #[must_use]
    pub fn into_parts(self) -> (Option<T>, Option<ErrorSet>) {
        self.flow.into_parts()
    }
}
