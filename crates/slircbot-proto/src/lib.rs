//! # slircbot-proto
//!
//! The IRC wire pieces a command bot needs: a line codec for tokio,
//! message parsing and serialization, prefixes, channel-name and nick
//! character classes, and CTCP framing.
//!
//! ## Parsing IRC Messages
//!
//! ```rust
//! use slircbot_proto::Message;
//!
//! let msg: Message = ":alice!a@host PRIVMSG #rust :!hello world".parse().unwrap();
//! assert_eq!(msg.command, "PRIVMSG");
//! assert_eq!(msg.source_nickname(), Some("alice"));
//! assert_eq!(msg.params, vec!["#rust", "!hello world"]);
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod chan;
pub mod ctcp;
pub mod error;
#[cfg(feature = "tokio")]
pub mod line;
pub mod message;
pub mod nick;
pub mod prefix;
pub mod response;

pub use self::chan::ChannelExt;
pub use self::ctcp::Ctcp;
pub use self::error::{MessageParseError, ProtocolError};
#[cfg(feature = "tokio")]
pub use self::line::LineCodec;
pub use self::message::Message;
pub use self::prefix::Prefix;
