//! Configuration loading and management.
//!
//! - [`types`]: the TOML document (`Config`, `ServerConfig`, `BotConfig`, `CommandDef`)
//! - [`defaults`]: serde default functions
//! - [`validation`]: startup checks reporting every problem at once

mod defaults;
mod types;
mod validation;

pub use defaults::{DEFAULT_COMMAND_PREFIX, DEFAULT_CORE_COMMAND, DEFAULT_PORT, DEFAULT_USERNAME};
pub use types::{BotConfig, CommandDef, Config, ConfigError, ServerConfig};
pub use validation::{ValidationError, validate};
