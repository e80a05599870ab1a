//! Trait-based conversions between external error types and `PipelineError`.

use figment::Error as FigmentError;

use super::PipelineError;

/// JSON encoding failures only arise while rendering telegram payloads.
impl From<serde_json::Error> for PipelineError {
    fn from(e: serde_json::Error) -> Self {
        Self::serialization(e)
    }
}

impl From<FigmentError> for PipelineError {
    fn from(e: FigmentError) -> Self {
        Self::config(e)
    }
}
