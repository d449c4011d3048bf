//! Core configuration types and loading.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

use super::defaults::{
    DEFAULT_COMMAND_PREFIX, DEFAULT_CORE_COMMAND, DEFAULT_PORT, default_command_prefix,
    default_core_command, default_username,
};
use super::validation::ValidationError;
use crate::dispatch::DispatchSettings;
use crate::error::ExtractError;
use crate::text::supertrim;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {}", format_errors(.0))]
    Invalid(Vec<ValidationError>),
    #[error("invalid command syntax: {0}")]
    Syntax(#[from] ExtractError),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Bot configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Where and as whom to connect.
    pub server: ServerConfig,
    /// Command syntax, default replies and the admin password.
    pub bot: BotConfig,
    /// User commands: a string is a fixed reply, an array is a synonym group.
    #[serde(default)]
    pub commands: BTreeMap<String, CommandDef>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// Server connection configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server hostname (e.g., "irc.libera.chat").
    pub host: String,
    /// Port; anything outside 1..=65535 (or absent) means 6667.
    pub port: Option<i64>,
    /// Login name sent in USER.
    #[serde(default = "default_username")]
    pub username: String,
    /// Real name sent in USER; defaults to the username.
    pub realname: Option<String>,
    /// Nicks to try, in order of preference.
    #[serde(default)]
    pub nicks: Vec<String>,
    /// Sent to NickServ as `IDENTIFY <password>` after registration.
    #[serde(default)]
    pub nickserv_password: String,
    /// Channels to join after registration.
    #[serde(default)]
    pub channels: Vec<String>,
}

impl ServerConfig {
    pub fn effective_port(&self) -> u16 {
        self.port
            .and_then(|p| u16::try_from(p).ok())
            .filter(|p| *p != 0)
            .unwrap_or(DEFAULT_PORT)
    }

    pub fn username(&self) -> &str {
        supertrim(&self.username)
    }

    pub fn realname(&self) -> &str {
        self.realname.as_deref().map_or(self.username(), supertrim)
    }

    /// Nicks with surrounding whitespace removed; blanks dropped.
    pub fn nicks(&self) -> Vec<String> {
        trimmed_non_empty(&self.nicks)
    }

    pub fn channels(&self) -> Vec<String> {
        trimmed_non_empty(&self.channels)
    }

    pub fn nickserv_password(&self) -> &str {
        supertrim(&self.nickserv_password)
    }
}

fn trimmed_non_empty(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| supertrim(v))
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Command syntax and administrative settings.
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Marks the start of a command (literal).
    #[serde(default = "default_command_prefix")]
    pub command_prefix: String,
    /// Marks the end of an argument (literal); empty means end of line.
    #[serde(default)]
    pub argument_terminator: String,
    /// Reply to private messages that contain no known command.
    #[serde(default)]
    pub default_private: String,
    /// Reply to channel messages that mention the bot and contain no known command.
    #[serde(default)]
    pub mentioned_response: String,
    /// Name of the administrative command.
    #[serde(default = "default_core_command")]
    pub core_command: String,
    /// Password for `auth`. Required.
    #[serde(default)]
    pub admin_password: String,
}

impl BotConfig {
    /// Trimmed settings for the dispatch engine, with defaults for blanks.
    pub fn dispatch_settings(&self) -> DispatchSettings {
        DispatchSettings {
            command_prefix: non_blank_or(&self.command_prefix, DEFAULT_COMMAND_PREFIX),
            argument_terminator: supertrim(&self.argument_terminator).to_owned(),
            default_private: supertrim(&self.default_private).to_owned(),
            mentioned_response: supertrim(&self.mentioned_response).to_owned(),
        }
    }

    pub fn core_command(&self) -> String {
        non_blank_or(&self.core_command, DEFAULT_CORE_COMMAND)
    }
}

fn non_blank_or(value: &str, default: &str) -> String {
    match supertrim(value) {
        "" => default.to_owned(),
        trimmed => trimmed.to_owned(),
    }
}

/// One entry of the `[commands]` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CommandDef {
    /// Always reply with this text.
    Fixed(String),
    /// Invoke these commands in order. Items that are not strings are ignored.
    Synonyms(Vec<toml::Value>),
    /// Anything else; skipped when the command table is built.
    Other(toml::Value),
}

impl CommandDef {
    /// Synonym targets that are strings, in order.
    pub fn synonym_targets(&self) -> impl Iterator<Item = &str> {
        let items = match self {
            Self::Synonyms(items) => items.as_slice(),
            _ => &[],
        };
        items.iter().filter_map(toml::Value::as_str)
    }
}
