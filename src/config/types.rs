//! Core configuration types and loading.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

use super::validation::{ValidationError, validate};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {} problem(s)", .0.len())]
    Invalid(Vec<ValidationError>),
}

/// Interpreter shell configuration. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server the channel is attached to.
    #[serde(default)]
    pub server: ServerConfig,
    /// The channel commands are issued in.
    #[serde(default)]
    pub channel: ChannelConfig,
    /// Logging output.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Command table extensions.
    #[serde(default)]
    pub commands: CommandsConfig,
}

impl Config {
    /// Load and validate configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        validate(&config).map_err(ConfigError::Invalid)?;
        Ok(config)
    }
}

/// Server identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Display name used in logs (default: "localhost").
    #[serde(default = "default_server_name")]
    pub name: String,
    /// Whether the channel starts out protocol-backed (default: true).
    /// With `false` every command fails as not connected.
    #[serde(default = "default_connected")]
    pub connected: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_server_name(),
            connected: default_connected(),
        }
    }
}

/// Channel configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelConfig {
    /// Channel name; plain text is sent here (default: "#lobby").
    #[serde(default = "default_channel_name")]
    pub name: String,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            name: default_channel_name(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            format: LogFormat::default(),
        }
    }
}

/// Command table configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommandsConfig {
    /// Extra commands that only show a notice, keyed by name.
    /// Cannot replace the built-in `join`/`part` entries.
    #[serde(default)]
    pub disabled: BTreeMap<String, String>,
}

fn default_server_name() -> String {
    "localhost".to_string()
}

fn default_connected() -> bool {
    true
}

fn default_channel_name() -> String {
    "#lobby".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}
