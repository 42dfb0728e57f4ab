//! Configuration management for the call session controller
//!
//! Values come from built-in defaults, then an optional `config.toml`, then
//! `CALLCTL_*` environment variables.

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::Deserialize;
use std::collections::HashSet;

use crate::device::DeviceOptions;

const DEFAULT_CONFIG_PATH: &str = "config";
const ENV_PREFIX: &str = "CALLCTL";

/// What happens to the session handle after a hangup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RestartPolicy {
    /// Keep the handle; the next start reconnects it without a new credential
    #[default]
    Reuse,
    /// Drop the handle; the next start fetches a fresh credential
    Recreate,
}

/// Complete controller configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend endpoint answering `{ "token": "<string>" }`
    /// Environment: CALLCTL_TOKEN_URL
    pub token_url: String,

    /// Environment: CALLCTL_RESTART_POLICY
    #[serde(default)]
    pub restart_policy: RestartPolicy,

    /// Options handed to the voice SDK at handle construction
    #[serde(default)]
    pub device: DeviceOptions,
}

impl AppConfig {
    /// Load `config.toml` from the working directory with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Load from a config file path (extension optional). A missing file is
    /// not an error, defaults apply instead.
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        let settings = Self::defaults()?
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        Self::finish(settings)
    }

    /// Parse configuration from TOML text, without environment overrides
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        let settings = Self::defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;

        Self::finish(settings)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
        Config::builder()
            .set_default("token_url", "http://127.0.0.1:8080/token")?
            .set_default("restart_policy", "reuse")
    }

    fn finish(settings: Config) -> Result<Self, config::ConfigError> {
        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.token_url.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "token_url cannot be empty".into(),
            ));
        }

        if let Err(e) = reqwest::Url::parse(&self.token_url) {
            return Err(config::ConfigError::Message(format!(
                "token_url is not a valid URL ({}): {}",
                self.token_url, e
            )));
        }

        if self.device.codec_preferences.is_empty() {
            return Err(config::ConfigError::Message(
                "device.codec_preferences must list at least one codec".into(),
            ));
        }

        let mut seen = HashSet::new();
        for codec in &self.device.codec_preferences {
            if !seen.insert(codec) {
                return Err(config::ConfigError::Message(format!(
                    "device.codec_preferences lists {} more than once",
                    codec
                )));
            }
        }

        Ok(())
    }
}
