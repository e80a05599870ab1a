//! Payload rendering for telegram records.

use serde::Serialize;

use crate::{PipelineError, PipelineResult};

/// Renders telegram payloads as JSON.
///
/// # Examples
///
/// ```
/// use response_pipeline::JsonSerializer;
///
/// let body = JsonSerializer::compact().serialize(&vec![1, 2])?;
/// assert_eq!(body, "[1,2]");
/// # Ok::<(), response_pipeline::PipelineError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct JsonSerializer {
    pretty: bool,
}

impl JsonSerializer {
    /// Single-line output.
    #[must_use]
    pub const fn compact() -> Self {
        Self { pretty: false }
    }

    /// Indented, multi-line output.
    #[must_use]
    pub const fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Returns `true` when output is indented.
    #[must_use]
    pub const fn is_pretty(self) -> bool {
        self.pretty
    }

    /// Serialize `payload`.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Serialization`] when the payload's
    /// `Serialize` implementation fails or produces a map with non-string
    /// keys.
    pub fn serialize<V>(self, payload: &V) -> PipelineResult<String>
    where
        V: Serialize + ?Sized,
    {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(payload)
        } else {
            serde_json::to_string(payload)
        };
        rendered.map_err(PipelineError::serialization)
    }
}
