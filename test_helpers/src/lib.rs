//! Test helpers shared across crates.
//!
//! This crate provides a telegram logger that records what it receives and
//! payloads whose serialization always fails.

pub mod recording;

pub use recording::{CapturedFailure, CapturedTelegram, RecordingLogger};

use serde::{Serialize, Serializer, ser::Error as _};

/// Payload whose `Serialize` implementation always fails.
///
/// # Examples
///
/// ```
/// use test_helpers::FailingPayload;
/// assert!(serde_json::to_string(&FailingPayload).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct FailingPayload;

/// Message reported by [`FailingPayload`].
pub const FAILING_PAYLOAD_MESSAGE: &str = "payload refuses to serialize";

impl Serialize for FailingPayload {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Err(S::Error::custom(FAILING_PAYLOAD_MESSAGE))
    }
}
