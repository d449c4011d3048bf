//! Unified error handling for slircbot.
//!
//! Handler outcomes are plain text and never appear here; these are the
//! failures a caller of the library can actually observe.

use thiserror::Error;

use crate::config::ConfigError;

// ============================================================================
// Session Errors (dispatch preconditions)
// ============================================================================

/// Errors from [`crate::state::Session`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Dispatch or registry access before a configuration was loaded.
    #[error("bot is not ready: no configuration loaded")]
    NotReady,
}

// ============================================================================
// Extraction Errors (pattern compilation)
// ============================================================================

/// Errors building a [`crate::extract::CommandExtractor`].
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("command prefix must not be empty")]
    EmptyPrefix,

    #[error("failed to compile command pattern: {0}")]
    Pattern(#[from] regex::Error),
}

// ============================================================================
// Connection Errors (network client)
// ============================================================================

/// Errors that end a connection.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("protocol error: {0}")]
    Protocol(#[from] slircbot_proto::ProtocolError),

    #[error("none of the configured nicks were accepted")]
    NickUnavailable,

    #[error("server closed the connection")]
    Closed,

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ConnectionError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Protocol(_) => "protocol",
            Self::NickUnavailable => "nick_unavailable",
            Self::Closed => "closed",
            Self::Session(_) => "session",
            Self::Config(_) => "config",
        }
    }
}
