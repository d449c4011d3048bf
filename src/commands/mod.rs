//! Command responders and the table they are registered in.
//!
//! A responder is bound to a command name and turns one invocation into
//! one line of text. Returning `""` means "say nothing".

mod core;
mod effect;
mod registry;

pub use self::core::CoreCommand;
pub use self::effect::{BotEffect, EffectReceiver, EffectSender, effect_channel, send_effect};
pub use self::registry::{CommandEntry, CommandRegistry, Resolution};

/// Everything a responder may look at for one invocation.
#[derive(Debug, Clone, Copy)]
pub struct Request<'a> {
    /// Channel the command arrived on; `None` for private messages.
    pub channel: Option<&'a str>,
    /// Nick of the sender.
    pub sender: &'a str,
    /// Folded nicks mentioned in the line (always empty in private).
    pub mentions: &'a [String],
    /// Supertrimmed argument, possibly empty.
    pub argument: &'a str,
}

impl Request<'_> {
    /// Whether the command arrived on a channel.
    pub fn is_public(&self) -> bool {
        self.channel.is_some()
    }
}

/// Capability to answer a command.
///
/// Implementations must not fail: any internal problem is reported as the
/// returned text.
pub trait Responder: Send + Sync {
    /// Produce the reply for one invocation, or `""` for none.
    fn respond(&self, request: &Request<'_>) -> String;
}

/// Responds with the same text every time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedResponder {
    text: String,
}

impl FixedResponder {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Responder for FixedResponder {
    fn respond(&self, _request: &Request<'_>) -> String {
        self.text.clone()
    }
}

/// Adapts a closure into a [`Responder`].
///
/// ```
/// use slircbot::commands::{FnResponder, Request, Responder};
///
/// let shout = FnResponder::new(|req: &Request<'_>| req.argument.to_uppercase());
/// let req = Request { channel: None, sender: "alice", mentions: &[], argument: "hi" };
/// assert_eq!(shout.respond(&req), "HI");
/// ```
pub struct FnResponder<F> {
    f: F,
}

impl<F> FnResponder<F>
where
    F: Fn(&Request<'_>) -> String + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> Responder for FnResponder<F>
where
    F: Fn(&Request<'_>) -> String + Send + Sync,
{
    fn respond(&self, request: &Request<'_>) -> String {
        (self.f)(request)
    }
}
