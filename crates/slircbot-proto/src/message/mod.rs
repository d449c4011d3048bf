//! IRC message type, parsing and serialization.

mod parse;
mod serialize;

use crate::prefix::Prefix;

/// An owned IRC message.
///
/// Tags are accepted on input and dropped; the bot never sends them.
///
/// # Example
///
/// ```
/// use slircbot_proto::Message;
///
/// let msg: Message = ":nick!user@host PRIVMSG #channel :Hello!".parse().unwrap();
/// assert_eq!(msg.param(1), Some("Hello!"));
///
/// let reply = Message::privmsg("#channel", "Hi there");
/// assert_eq!(reply.to_string(), "PRIVMSG #channel :Hi there\r\n");
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Message {
    /// Message prefix/source (e.g., `nick!user@host`).
    pub prefix: Option<Prefix>,
    /// Command name, uppercased, or a three-digit numeric.
    pub command: String,
    /// Parameters, the trailing one included as the last element.
    pub params: Vec<String>,
}

impl Message {
    /// Create a message without a prefix.
    pub fn new<C, I, P>(command: C, params: I) -> Self
    where
        C: Into<String>,
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Message {
            prefix: None,
            command: command.into(),
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    /// Attach a prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: Prefix) -> Self {
        self.prefix = Some(prefix);
        self
    }

    /// Get the nickname from the message prefix, if present.
    pub fn source_nickname(&self) -> Option<&str> {
        self.prefix.as_ref().and_then(Prefix::nick)
    }

    /// Parameter by index.
    pub fn param(&self, index: usize) -> Option<&str> {
        self.params.get(index).map(String::as_str)
    }

    /// Create a PRIVMSG message to a target with text
    #[must_use]
    pub fn privmsg(target: impl Into<String>, text: impl Into<String>) -> Self {
        Message::new("PRIVMSG", [target.into(), text.into()])
    }

    /// Create a NOTICE message to a target with text
    #[must_use]
    pub fn notice(target: impl Into<String>, text: impl Into<String>) -> Self {
        Message::new("NOTICE", [target.into(), text.into()])
    }

    /// `NICK <nick>`
    #[must_use]
    pub fn nick(nick: impl Into<String>) -> Self {
        Message::new("NICK", [nick.into()])
    }

    /// `USER <username> 0 * :<realname>`
    #[must_use]
    pub fn user(username: impl Into<String>, realname: impl Into<String>) -> Self {
        Message::new(
            "USER",
            [username.into(), "0".to_owned(), "*".to_owned(), realname.into()],
        )
    }

    /// `JOIN <channel>`
    #[must_use]
    pub fn join(channel: impl Into<String>) -> Self {
        Message::new("JOIN", [channel.into()])
    }

    /// `PART <channel> [:<reason>]`
    #[must_use]
    pub fn part(channel: impl Into<String>, reason: Option<&str>) -> Self {
        let mut params = vec![channel.into()];
        params.extend(reason.map(str::to_owned));
        Message::new("PART", params)
    }

    /// `QUIT :<reason>`
    #[must_use]
    pub fn quit(reason: impl Into<String>) -> Self {
        Message::new("QUIT", [reason.into()])
    }

    /// `PONG :<token>`
    #[must_use]
    pub fn pong(token: impl Into<String>) -> Self {
        Message::new("PONG", [token.into()])
    }
}
