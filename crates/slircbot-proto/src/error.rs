//! Error types for the protocol crate.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Top-level protocol errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// I/O error during reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Line could not be parsed as an IRC message.
    #[error("invalid message {string:?}: {cause}")]
    InvalidMessage {
        /// The offending line.
        string: String,
        /// Why it failed.
        cause: MessageParseError,
    },
}

/// Reasons a single line fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MessageParseError {
    /// Nothing but whitespace.
    #[error("empty message")]
    EmptyMessage,

    /// The command token is missing or malformed.
    #[error("invalid command at position {position}")]
    InvalidCommand {
        /// Byte offset where parsing stopped.
        position: usize,
    },
}
