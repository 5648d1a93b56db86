//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use crate::commands::{BUILTIN_COMMANDS, is_modelled};
use std::collections::HashSet;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("channel.name is required")]
    MissingChannelName,
    #[error("commands.disabled has an empty command name")]
    EmptyCommandName,
    #[error("commands.disabled name must not contain spaces, got '{0}'")]
    CommandNameHasSpace(String),
    #[error("commands.disabled cannot replace built-in or modelled command '{0}'")]
    ReservedCommandName(String),
    #[error("commands.disabled lists '{0}' more than once (names are case-insensitive)")]
    DuplicateCommandName(String),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.channel.name.trim().is_empty() {
        errors.push(ValidationError::MissingChannelName);
    }

    let mut seen = HashSet::new();
    for name in config.commands.disabled.keys() {
        let lower = name.to_lowercase();
        if name.is_empty() {
            errors.push(ValidationError::EmptyCommandName);
        } else if name.contains(' ') {
            errors.push(ValidationError::CommandNameHasSpace(name.clone()));
        } else if is_modelled(&lower) || BUILTIN_COMMANDS.contains(&lower.as_str()) {
            errors.push(ValidationError::ReservedCommandName(name.clone()));
        } else if !seen.insert(lower) {
            errors.push(ValidationError::DuplicateCommandName(name.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
