//! CTCP (Client-to-Client Protocol) framing.
//!
//! CTCP requests ride inside PRIVMSG text wrapped in `\x01`; replies go
//! back as NOTICE with the same framing.
//!
//! # Reference
//! - CTCP specification: <https://modern.ircdocs.horse/ctcp.html>
//!
//! ```
//! use slircbot_proto::Ctcp;
//!
//! let ctcp = Ctcp::parse("\x01VERSION\x01").unwrap();
//! assert_eq!(ctcp.command, "VERSION");
//! assert_eq!(ctcp.params, None);
//! assert_eq!(Ctcp::reply("VERSION", "bot 1.0"), "\x01VERSION bot 1.0\x01");
//! ```

/// The CTCP delimiter character (`\x01`).
pub const CTCP_DELIM: char = '\x01';

/// A CTCP request borrowed from message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ctcp<'a> {
    /// Command name, uppercased.
    pub command: String,
    /// Everything after the first space, if anything.
    pub params: Option<&'a str>,
}

impl<'a> Ctcp<'a> {
    /// Parse CTCP framing; `None` for ordinary text.
    ///
    /// The closing delimiter is optional, as many clients omit it.
    pub fn parse(text: &'a str) -> Option<Self> {
        let inner = text.strip_prefix(CTCP_DELIM)?;
        let inner = inner.strip_suffix(CTCP_DELIM).unwrap_or(inner);
        if inner.is_empty() {
            return None;
        }

        let (command, params) = match inner.split_once(' ') {
            Some((command, params)) => (command, Some(params)),
            None => (inner, None),
        };

        Some(Ctcp {
            command: command.to_ascii_uppercase(),
            params,
        })
    }

    /// Whether text carries CTCP framing at all.
    pub fn is_ctcp(text: &str) -> bool {
        text.starts_with(CTCP_DELIM)
    }

    /// Frame a reply body.
    pub fn reply(command: &str, body: &str) -> String {
        if body.is_empty() {
            format!("{CTCP_DELIM}{command}{CTCP_DELIM}")
        } else {
            format!("{CTCP_DELIM}{command} {body}{CTCP_DELIM}")
        }
    }
}
