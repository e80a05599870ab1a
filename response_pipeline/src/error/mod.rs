//! Error types produced by pipeline stages.

mod constructors;
mod conversions;
mod types;

pub use types::{NullStage, PipelineError};

/// Result alias used by every fallible pipeline operation.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Boxed error accepted from transformation functions and backing operations.
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

#[cfg(test)]
mod tests;
