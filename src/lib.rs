//! slircbot - Straylight IRC command bot.
//!
//! Turns channel and private messages into command invocations:
//!
//! ```text
//! "bob: !hello"  ->  TextNormalizer -> MentionResolver -> CommandExtractor
//!                ->  CommandRegistry -> responders -> "bob: Hello!"
//! ```
//!
//! The [`state::Session`] ties configuration, membership and the
//! [`dispatch::DispatchEngine`] together; [`network`] drives it from a
//! live IRC connection.

pub mod auth;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod extract;
pub mod mention;
pub mod network;
pub mod state;
pub mod telemetry;
pub mod text;

pub use config::Config;
pub use dispatch::{DispatchEngine, DispatchSettings, Origin};
pub use error::{ConnectionError, ExtractError, SessionError};
pub use state::Session;
