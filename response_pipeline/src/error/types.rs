//! Primary error enum for fatal pipeline failures.
//!
//! Business errors never appear here: those travel in an
//! [`crate::ErrorSet`] alongside a still-valid value. Every variant below
//! aborts the chain and propagates to the caller. Variants wrapping another
//! error expose it through `source()` only; walk the chain to render it.

use std::fmt;

use figment::Error as FigmentError;
use thiserror::Error;

use super::BoxedSource;

/// Entry point that rejected an absent seed value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum NullStage {
    /// The supplier passed to `try_of` produced nothing.
    Supplier,
    /// The literal passed to `try_with` was absent.
    Input,
}

impl fmt::Display for NullStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Supplier => f.write_str("supplier"),
            Self::Input => f.write_str("input"),
        }
    }
}

/// Fatal failures raised while building or running a pipeline.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PipelineError {
    /// A pipeline was seeded with an absent value.
    #[error("pipeline {stage} produced no value")]
    NullResult {
        /// Which entry point received the absent value.
        stage: NullStage,
    },

    /// A mapping function failed.
    #[error("transformation failed")]
    Transform {
        /// Error reported by the mapping function.
        #[source]
        source: BoxedSource,
    },

    /// A backing operation failed for an unexpected, infrastructure reason.
    #[error("service execution failed")]
    Service {
        /// Error reported by the backing operation.
        #[source]
        source: BoxedSource,
    },

    /// A telegram payload could not be serialized.
    #[error("failed to serialize telegram payload")]
    Serialization {
        /// Underlying encoder failure.
        #[source]
        source: serde_json::Error,
    },

    /// Telegram configuration could not be loaded.
    #[error("failed to load telegram configuration")]
    Config(#[from] Box<FigmentError>),
}
