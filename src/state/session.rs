//! The hosting session.
//!
//! A session starts out unconfigured. [`Session::configure`] builds the
//! dispatch engine from a [`Config`]; until then every dispatch fails with
//! [`SessionError::NotReady`]. A failed configure leaves the session reset.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{info, warn};

use super::Membership;
use crate::commands::{
    CommandRegistry, CoreCommand, EffectReceiver, EffectSender, FixedResponder, effect_channel,
};
use crate::config::{CommandDef, Config, ConfigError, validate};
use crate::dispatch::{DispatchEngine, Origin};
use crate::error::SessionError;
use crate::text::{fold, supertrim};

/// Per-connection bot state.
#[derive(Debug)]
pub struct Session {
    engine: Option<DispatchEngine>,
    membership: Membership,
    nick: String,
    effects: EffectSender,
}

impl Session {
    /// Create an unconfigured session and the receiving end of its effect queue.
    pub fn new() -> (Self, EffectReceiver) {
        let (effects, rx) = effect_channel();
        let session = Self {
            engine: None,
            membership: Membership::new(),
            nick: String::new(),
            effects,
        };
        (session, rx)
    }

    /// Reset, validate `config`, and build the command table.
    ///
    /// Fixed commands load before synonym groups. The core command name is
    /// removed from the user table before the core responder is installed.
    pub fn configure(&mut self, config: &Config) -> Result<(), ConfigError> {
        self.reset();
        validate(config).map_err(ConfigError::Invalid)?;

        let mut registry = CommandRegistry::new();
        for (name, def) in &config.commands {
            match def {
                CommandDef::Fixed(reply) => registry.register_direct(
                    supertrim(name),
                    Arc::new(FixedResponder::new(supertrim(reply))),
                ),
                CommandDef::Synonyms(_) => {}
                CommandDef::Other(value) => warn!(
                    command = %name,
                    kind = value.type_str(),
                    "Ignoring command that is neither text nor a list"
                ),
            }
        }
        for (name, def) in &config.commands {
            if let CommandDef::Synonyms(items) = def {
                for item in items.iter().filter(|v| !v.is_str()) {
                    warn!(command = %name, item = %item, "Ignoring non-string synonym");
                }
                let targets = def
                    .synonym_targets()
                    .map(supertrim)
                    .filter(|t| !t.is_empty());
                registry.register_synonym(supertrim(name), targets);
            }
        }

        let core = config.bot.core_command();
        registry.remove(&core);
        registry.register_direct(
            &core,
            Arc::new(CoreCommand::new(
                &config.bot.admin_password,
                self.effects.clone(),
            )),
        );

        let settings = config.bot.dispatch_settings();
        let engine = DispatchEngine::new(settings, registry)?;
        info!(
            commands = engine.registry().len(),
            prefix = %engine.settings().command_prefix,
            core = %core,
            "Session configured"
        );
        self.engine = Some(engine);
        Ok(())
    }

    /// Drop the command table; the session is no longer ready.
    ///
    /// Membership is left alone so a live connection keeps its channel
    /// lists across a reconfigure.
    pub fn reset(&mut self) {
        self.engine = None;
    }

    pub fn is_ready(&self) -> bool {
        self.engine.is_some()
    }

    pub fn engine(&self) -> Option<&DispatchEngine> {
        self.engine.as_ref()
    }

    pub fn registry_mut(&mut self) -> Result<&mut CommandRegistry, SessionError> {
        self.engine
            .as_mut()
            .map(DispatchEngine::registry_mut)
            .ok_or(SessionError::NotReady)
    }

    /// The bot's current nick.
    pub fn nick(&self) -> &str {
        &self.nick
    }

    pub fn set_nick(&mut self, nick: &str) {
        self.nick = nick.to_owned();
    }

    /// Whether `nick` is the bot's own.
    pub fn is_me(&self, nick: &str) -> bool {
        fold(nick) == fold(&self.nick)
    }

    pub fn membership(&self) -> &Membership {
        &self.membership
    }

    /// Sender for effects outside the core command.
    pub fn effects(&self) -> &EffectSender {
        &self.effects
    }

    /// Dispatch one line.
    ///
    /// `channel` is `Some` for channel messages. A channel the bot knows
    /// nothing about is treated as having no members.
    pub fn dispatch(
        &self,
        channel: Option<&str>,
        sender: &str,
        message: &str,
    ) -> Result<Vec<String>, SessionError> {
        let engine = self.engine.as_ref().ok_or(SessionError::NotReady)?;
        let empty = HashSet::new();
        let origin = match channel {
            Some(channel) => Origin::Public {
                channel,
                members: self.membership.members(channel).unwrap_or(&empty),
            },
            None => Origin::Private,
        };
        Ok(engine.dispatch(origin, &self.nick, sender, message))
    }

    /// A complete NAMES list arrived for `channel`.
    pub fn on_names<I, S>(&mut self, channel: &str, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.membership.replace(channel, names);
    }

    /// Someone joined. The bot's own join waits for NAMES instead.
    pub fn on_join(&mut self, channel: &str, nick: &str) {
        if !self.is_me(nick) {
            self.membership.join(channel, nick);
        }
    }

    /// Someone parted or was kicked. If it was the bot, forget the channel.
    pub fn on_part(&mut self, channel: &str, nick: &str) {
        if self.is_me(nick) {
            self.membership.remove_channel(channel);
        } else {
            self.membership.part(channel, nick);
        }
    }

    pub fn on_quit(&mut self, nick: &str) {
        self.membership.quit(nick);
    }

    /// A nick change. Tracks the bot's own nick too.
    pub fn on_nick(&mut self, old: &str, new: &str) {
        if self.is_me(old) {
            self.nick = new.to_owned();
        }
        self.membership.rename(old, new);
    }
}
