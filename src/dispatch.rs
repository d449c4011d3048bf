//! The dispatch engine: one incoming line in, zero or more reply lines out.
//!
//! ```text
//! Start -> Extracted -> { per match: Resolve -> Invoke -> Collect } -> Assembled
//! ```
//!
//! Nothing here outlives a single call except the registry and settings.

use std::collections::HashSet;

use tracing::{Level, debug, span};

use crate::commands::{CommandRegistry, Request, Resolution};
use crate::error::ExtractError;
use crate::extract::CommandExtractor;
use crate::mention;
use crate::telemetry::CommandTimer;
use crate::text::{fold, mention_prefix};

/// Per-session dispatch settings, already trimmed and defaulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchSettings {
    pub command_prefix: String,
    pub argument_terminator: String,
    /// Sent when a private message produced no replies; empty for none.
    pub default_private: String,
    /// Sent when a public message mentioning the bot produced no replies.
    pub mentioned_response: String,
}

/// Where a line came from.
#[derive(Debug, Clone, Copy)]
pub enum Origin<'a> {
    /// A channel message, with a snapshot of the channel's folded membership.
    Public {
        channel: &'a str,
        members: &'a HashSet<String>,
    },
    /// A message sent directly to the bot.
    Private,
}

impl<'a> Origin<'a> {
    fn channel(&self) -> Option<&'a str> {
        match *self {
            Origin::Public { channel, .. } => Some(channel),
            Origin::Private => None,
        }
    }
}

/// Extraction, resolution, invocation and reply assembly for one session.
#[derive(Debug)]
pub struct DispatchEngine {
    settings: DispatchSettings,
    extractor: CommandExtractor,
    registry: CommandRegistry,
}

impl DispatchEngine {
    pub fn new(
        settings: DispatchSettings,
        registry: CommandRegistry,
    ) -> Result<Self, ExtractError> {
        let extractor =
            CommandExtractor::new(&settings.command_prefix, &settings.argument_terminator)?;
        Ok(Self {
            settings,
            extractor,
            registry,
        })
    }

    pub fn settings(&self) -> &DispatchSettings {
        &self.settings
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut CommandRegistry {
        &mut self.registry
    }

    /// Process one line.
    ///
    /// `own_nick` is the bot's current nick, used for the "mentioned" default.
    pub fn dispatch(
        &self,
        origin: Origin<'_>,
        own_nick: &str,
        sender: &str,
        message: &str,
    ) -> Vec<String> {
        let _span = span!(
            Level::DEBUG,
            "dispatch",
            sender = %sender,
            channel = origin.channel(),
        )
        .entered();

        let mentions = match origin {
            Origin::Public { members, .. } => mention::resolve(members, message),
            Origin::Private => Vec::new(),
        };
        let prefix = mention_prefix(&mentions);
        let channel = origin.channel();

        let mut replies = Vec::new();
        for m in self.extractor.extract(message) {
            let request = Request {
                channel,
                sender,
                mentions: &mentions,
                argument: &m.argument,
            };

            let kind = match self.registry.resolve(&m.command) {
                Resolution::NotFound => "unknown",
                Resolution::Direct(_) => "direct",
                Resolution::Synonym(_) => "synonym",
            };
            debug!(command = %m.command, kind, "Command matched");
            let _timer = CommandTimer::new(&m.command);

            replies.extend(
                self.registry
                    .invoke(&m.command, &request)
                    .into_iter()
                    .map(|reply| format!("{prefix}{reply}")),
            );
        }

        if replies.is_empty() {
            match origin {
                Origin::Public { .. } => {
                    let nick = fold(own_nick);
                    if !self.settings.mentioned_response.is_empty() && mentions.contains(&nick) {
                        replies.push(self.settings.mentioned_response.clone());
                    }
                }
                Origin::Private => {
                    if !self.settings.default_private.is_empty() {
                        replies.push(self.settings.default_private.clone());
                    }
                }
            }
        }

        replies
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{FixedResponder, FnResponder};
    use std::sync::Arc;

    fn settings(terminator: &str) -> DispatchSettings {
        DispatchSettings {
            command_prefix: "!".into(),
            argument_terminator: terminator.into(),
            default_private: "Try !help".into(),
            mentioned_response: "You rang?".into(),
        }
    }

    fn engine(terminator: &str) -> DispatchEngine {
        let mut reg = CommandRegistry::new();
        reg.register_direct("hello", Arc::new(FixedResponder::new("Hello!")));
        reg.register_direct(
            "echo",
            Arc::new(FnResponder::new(|r: &Request<'_>| r.argument.to_owned())),
        );
        reg.register_synonym("both", ["hello", "echo", "missing"]);
        DispatchEngine::new(settings(terminator), reg).unwrap()
    }

    fn members(nicks: &[&str]) -> HashSet<String> {
        nicks.iter().map(|n| (*n).to_owned()).collect()
    }

    #[test]
    fn test_private_command() {
        let e = engine("");
        assert_eq!(e.dispatch(Origin::Private, "bot", "alice", "!ECHO hi there"), vec!["hi there"]);
    }

    #[test]
    fn test_public_replies_are_prefixed() {
        let e = engine("");
        let m = members(&["alice", "bob", "carol"]);
        let origin = Origin::Public { channel: "#a", members: &m };
        assert_eq!(
            e.dispatch(origin, "bot", "alice", "bob, carol: !hello"),
            vec!["bob, carol: Hello!"]
        );
    }

    #[test]
    fn test_synonym_replies_each_prefixed() {
        let e = engine("");
        let m = members(&["bob"]);
        let origin = Origin::Public { channel: "#a", members: &m };
        assert_eq!(
            e.dispatch(origin, "bot", "alice", "bob !both x"),
            vec!["bob: Hello!", "bob: x"]
        );
    }

    #[test]
    fn test_matches_processed_in_order() {
        let e = engine(";");
        assert_eq!(
            e.dispatch(Origin::Private, "bot", "alice", "!echo one; !nope; !hello; !echo two"),
            vec!["one", "Hello!", "two"]
        );
    }

    #[test]
    fn test_private_default() {
        let e = engine("");
        assert_eq!(e.dispatch(Origin::Private, "bot", "alice", ""), vec!["Try !help"]);
        assert_eq!(e.dispatch(Origin::Private, "bot", "alice", "!unknown"), vec!["Try !help"]);
    }

    #[test]
    fn test_mentioned_default() {
        let e = engine("");
        let m = members(&["alice", "slircbot"]);
        let origin = Origin::Public { channel: "#a", members: &m };
        assert_eq!(
            e.dispatch(origin, "SlircBot", "alice", "hey SLIRCBOT"),
            vec!["You rang?"]
        );
        assert!(e.dispatch(origin, "SlircBot", "alice", "hey alice").is_empty());
        assert_eq!(
            e.dispatch(origin, "SlircBot", "alice", "slircbot !hello"),
            vec!["slircbot: Hello!"]
        );
    }

    #[test]
    fn test_empty_defaults_stay_silent() {
        let mut s = settings("");
        s.default_private.clear();
        s.mentioned_response.clear();
        let e = DispatchEngine::new(s, CommandRegistry::new()).unwrap();
        let m = members(&["bot"]);
        assert!(e.dispatch(Origin::Private, "bot", "alice", "hi").is_empty());
        assert!(
            e.dispatch(Origin::Public { channel: "#a", members: &m }, "bot", "alice", "bot?")
                .is_empty()
        );
    }
}
