//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use crate::text::supertrim;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("server.host is required")]
    MissingHost,
    #[error("server.nicks must contain at least one nick")]
    MissingNicks,
    #[error("bot.admin_password is required")]
    MissingAdminPassword,
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if supertrim(&config.server.host).is_empty() {
        errors.push(ValidationError::MissingHost);
    }
    if config.server.nicks().is_empty() {
        errors.push(ValidationError::MissingNicks);
    }
    if supertrim(&config.bot.admin_password).is_empty() {
        errors.push(ValidationError::MissingAdminPassword);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
