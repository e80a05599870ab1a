//! Severity at which telegrams are emitted.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Level used for telegram records.
///
/// Each level has a fixed-width prefix so aligned log output stays readable.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum TelegramLevel {
    /// Error level.
    Error,
    /// Warning level.
    Warn,
    /// Informational level.
    Info,
    /// Trace level, the default for telegrams.
    #[default]
    Trace,
}

impl TelegramLevel {
    /// Five-character prefix written ahead of the record.
    ///
    /// ```
    /// use response_pipeline::TelegramLevel;
    /// assert_eq!(TelegramLevel::Warn.prefix(), "WARN ");
    /// assert_eq!(TelegramLevel::Trace.prefix().len(), 5);
    /// ```
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warn => "WARN ",
            Self::Info => "INFO ",
            Self::Trace => "     ",
        }
    }

    /// Matching [`tracing::Level`].
    #[must_use]
    pub const fn as_tracing(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Trace => tracing::Level::TRACE,
        }
    }
}

impl fmt::Display for TelegramLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Trace => "TRACE",
        };
        f.write_str(name)
    }
}
