//! The core command: administrative subcommands behind one command name.
//!
//! ```text
//! <core> about
//! <core> auth <password>      (private only)
//! <core> quit                 (needs auth)
//! <core> join <channel>       (needs auth)
//! <core> part <channel>       (needs auth)
//! <core> time
//! <core> echo <text>
//! ```
//!
//! Each privileged subcommand spends the caller's authentication, whether or
//! not the requested action turns out to be useful.

use tracing::info;

use super::{BotEffect, EffectSender, Request, Responder, send_effect};
use crate::auth::AuthGate;
use crate::text::{fold, split_first_word};

/// Text for `about`.
pub const ABOUT: &str = concat!(
    "This bot is running slircbot, version ",
    env!("CARGO_PKG_VERSION"),
    ". More information is at <https://github.com/sid3xyz/slircbot>."
);

const NOT_AUTHENTICATED: &str = "Not authenticated";

/// Responder for the administrative command family.
#[derive(Debug)]
pub struct CoreCommand {
    gate: AuthGate,
    effects: EffectSender,
}

impl CoreCommand {
    pub fn new(password: &str, effects: EffectSender) -> Self {
        Self {
            gate: AuthGate::new(password),
            effects,
        }
    }

    pub fn gate(&self) -> &AuthGate {
        &self.gate
    }

    fn request_effect(&self, effect: BotEffect) {
        send_effect(&self.effects, effect);
    }

    fn auth(&self, req: &Request<'_>, password: &str) -> String {
        if req.is_public() {
            return "Please do not authenticate publicly.".to_owned();
        }
        if self.gate.authenticate(req.sender, password) {
            "Authenticated. Please keep in mind that authentication applies for only one \
             core command and is void if you change nicks."
                .to_owned()
        } else {
            "Invalid password".to_owned()
        }
    }

    fn quit(&self, req: &Request<'_>) -> String {
        if !self.gate.consume(req.sender) {
            return NOT_AUTHENTICATED.to_owned();
        }
        info!(by = %req.sender, "Quit requested");
        self.request_effect(BotEffect::Quit {
            reason: "Operator terminated the bot".to_owned(),
        });
        String::new()
    }

    fn join(&self, req: &Request<'_>, channel: &str) -> String {
        if channel.is_empty() {
            return "Please specify the channel to join".to_owned();
        }
        if !self.gate.consume(req.sender) {
            return NOT_AUTHENTICATED.to_owned();
        }
        info!(by = %req.sender, channel = %channel, "Join requested");
        self.request_effect(BotEffect::Join {
            channel: channel.to_owned(),
        });
        format!("Joined {channel}")
    }

    fn part(&self, req: &Request<'_>, channel: &str) -> String {
        if channel.is_empty() {
            return "Please specify the channel to part".to_owned();
        }
        if !self.gate.consume(req.sender) {
            return NOT_AUTHENTICATED.to_owned();
        }
        info!(by = %req.sender, channel = %channel, "Part requested");
        self.request_effect(BotEffect::Part {
            channel: channel.to_owned(),
            reason: "Operator commanded".to_owned(),
        });

        // The reply would go to a channel we are leaving.
        match req.channel {
            Some(origin) if fold(origin) == fold(channel) => String::new(),
            _ => format!("Parted {channel}"),
        }
    }
}

impl Responder for CoreCommand {
    fn respond(&self, req: &Request<'_>) -> String {
        let (subcommand, subargument) = split_first_word(req.argument);
        match fold(subcommand).as_str() {
            "" => "Core subcommand not specified".to_owned(),
            "about" => ABOUT.to_owned(),
            "auth" => self.auth(req, subargument),
            "quit" => self.quit(req),
            "join" => self.join(req, subargument),
            "part" => self.part(req, subargument),
            "time" => chrono::Utc::now()
                .format("%Y-%m-%d %H:%M:%S (UTC)")
                .to_string(),
            "echo" => subargument.to_owned(),
            _ => "Core subcommand not recognized".to_owned(),
        }
    }
}
