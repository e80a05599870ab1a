//! Extensions for mapping foreign errors to `PipelineResult` concisely.
//!
//! These helpers reduce repetitive `.map_err(PipelineError::transform)`
//! patterns inside mapping closures and backing-operation adapters.
//!
//! - Use [`PipelineResultExt::into_transform`] inside `try_map` style
//!   closures whose failures are transformation errors.
//! - Use [`PipelineResultExt::into_service`] when wrapping an
//!   infrastructure call that feeds `execute_service`.
//!
//! # Examples
//!
//! ```
//! use response_pipeline::{PipelineResult, PipelineResultExt};
//!
//! fn parse(raw: &str) -> PipelineResult<u16> {
//!     raw.parse::<u16>().into_transform()
//! }
//!
//! assert!(parse("8080").is_ok());
//! assert!(parse("port").is_err());
//! ```

use crate::{BoxedSource, PipelineError, PipelineResult};

/// Generic extension for mapping any `Result<T, E>` with a boxable error
/// into a `PipelineResult<T>`.
pub trait PipelineResultExt<T> {
    /// Convert the error into [`PipelineError::Transform`].
    ///
    /// # Errors
    ///
    /// Propagates the original error wrapped as a transformation failure.
    fn into_transform(self) -> PipelineResult<T>;

    /// Convert the error into [`PipelineError::Service`].
    ///
    /// # Errors
    ///
    /// Propagates the original error wrapped as a service failure.
    fn into_service(self) -> PipelineResult<T>;
}

impl<T, E> PipelineResultExt<T> for Result<T, E>
where
    E: Into<BoxedSource>,
{
    fn into_transform(self) -> PipelineResult<T> {
        self.map_err(PipelineError::transform)
    }

    fn into_service(self) -> PipelineResult<T> {
        self.map_err(PipelineError::service)
    }
}
