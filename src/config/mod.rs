//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Config struct definitions and loading
//! - [`validation`]: Startup validation

mod types;
mod validation;

pub use types::{
    ChannelConfig, CommandsConfig, Config, ConfigError, LogFormat, LoggingConfig, ServerConfig,
};
pub use validation::{ValidationError, validate};
