//! Telegram configuration loaded through `figment`.
//!
//! Values are layered in increasing precedence: built-in defaults, an
//! optional TOML file, then environment variables prefixed with
//! [`ENV_PREFIX`] (for example `RESPONSE_PIPELINE_LEVEL=info`).

use camino::Utf8Path;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::{PipelineError, PipelineResult, TelegramLevel};

/// Prefix for environment variables read by [`TelegramConfig::load`].
pub const ENV_PREFIX: &str = "RESPONSE_PIPELINE_";

/// Controls how telegrams are rendered and emitted.
///
/// # Examples
///
/// ```
/// use response_pipeline::{TelegramConfig, TelegramLevel};
///
/// let config = TelegramConfig::default();
/// assert_eq!(config.level, TelegramLevel::Trace);
/// assert!(config.banners);
/// assert!(!config.pretty);
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelegramConfig {
    /// Level at which telegram records are emitted.
    pub level: TelegramLevel,
    /// Frame payloads with start and end banners.
    pub banners: bool,
    /// Indent serialized payloads.
    pub pretty: bool,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            level: TelegramLevel::Trace,
            banners: true,
            pretty: false,
        }
    }
}

impl TelegramConfig {
    /// Build the provider stack without extracting it.
    ///
    /// A missing `file` is skipped rather than reported.
    #[must_use]
    pub fn figment(file: Option<&Utf8Path>) -> Figment {
        let base = Figment::from(Serialized::defaults(Self::default()));
        let layered = match file {
            Some(path) => base.merge(Toml::file(path.as_std_path())),
            None => base,
        };
        layered.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load the configuration from defaults, `file` and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Config`] when the file cannot be parsed or a
    /// value has the wrong type.
    pub fn load(file: Option<&Utf8Path>) -> PipelineResult<Self> {
        Self::figment(file)
            .extract()
            .map_err(PipelineError::config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_defaults_without_sources() {
        figment::Jail::expect_with(|_| {
            let config = TelegramConfig::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config, TelegramConfig::default());
            Ok(())
        });
    }

    #[test]
    fn environment_overrides_file() {
        figment::Jail::expect_with(|j| {
            j.create_file("telegram.toml", "level = \"warn\"\npretty = true\n")?;
            j.set_env("RESPONSE_PIPELINE_LEVEL", "error");
            let config = TelegramConfig::load(Some(Utf8Path::new("telegram.toml")))
                .map_err(|e| e.to_string())?;
            assert_eq!(config.level, TelegramLevel::Error);
            assert!(config.pretty);
            assert!(config.banners);
            Ok(())
        });
    }

    #[test]
    fn missing_file_is_skipped() {
        figment::Jail::expect_with(|_| {
            let config = TelegramConfig::load(Some(Utf8Path::new("absent.toml")))
                .map_err(|e| e.to_string())?;
            assert_eq!(config, TelegramConfig::default());
            Ok(())
        });
    }

    #[test]
    fn invalid_level_is_a_config_error() {
        figment::Jail::expect_with(|j| {
            j.set_env("RESPONSE_PIPELINE_LEVEL", "loud");
            let err = TelegramConfig::load(None);
            assert!(matches!(err, Err(PipelineError::Config(_))));
            Ok(())
        });
    }
}
