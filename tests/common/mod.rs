//! Integration test common infrastructure.
//!
//! Provides a scripted IRC server for exercising the bot's connection and
//! helpers for building configurations.

pub mod server;

#[allow(unused_imports)]
pub use server::FakeServer;

use slircbot::{Config, Session};
use slircbot::commands::EffectReceiver;

/// Configuration pointing at `port`, with extra `[bot]` keys and `[commands]` entries.
#[allow(dead_code)]
pub fn config(port: u16, bot: &str, commands: &str) -> Config {
    let toml = format!(
        r##"
[server]
host = "127.0.0.1"
port = {port}
nicks = ["bot", "bot_"]
channels = ["#rust"]

[bot]
admin_password = "secret"
{bot}

[commands]
{commands}
"##
    );
    Config::from_toml(&toml).expect("test config parses")
}

/// A session configured from [`config`].
#[allow(dead_code)]
pub fn session(bot: &str, commands: &str) -> (Session, EffectReceiver) {
    let (mut session, rx) = Session::new();
    session
        .configure(&config(6667, bot, commands))
        .expect("test config is valid");
    session.set_nick("bot");
    (session, rx)
}
