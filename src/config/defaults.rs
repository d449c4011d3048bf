//! Default value functions for configuration.

/// Login name when none is configured.
pub const DEFAULT_USERNAME: &str = "slircbot";

/// Command prefix when none (or only whitespace) is configured.
pub const DEFAULT_COMMAND_PREFIX: &str = "!";

/// Name of the administrative command when none is configured.
pub const DEFAULT_CORE_COMMAND: &str = "p";

/// Plaintext IRC port, used when the configured port is missing or out of range.
pub const DEFAULT_PORT: u16 = 6667;

pub fn default_username() -> String {
    DEFAULT_USERNAME.to_string()
}

pub fn default_command_prefix() -> String {
    DEFAULT_COMMAND_PREFIX.to_string()
}

pub fn default_core_command() -> String {
    DEFAULT_CORE_COMMAND.to_string()
}
