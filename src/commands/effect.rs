//! Side effects requested by responders.
//!
//! Responders only produce text. Anything that touches the connection is
//! queued here and applied by the network layer after the replies for the
//! current line have been sent.

use tokio::sync::mpsc;
use tracing::warn;

/// Sending half held by responders.
pub type EffectSender = mpsc::UnboundedSender<BotEffect>;
/// Receiving half drained by the connection.
pub type EffectReceiver = mpsc::UnboundedReceiver<BotEffect>;

/// Connection-level action requested by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotEffect {
    /// Leave the server and stop.
    Quit { reason: String },

    /// Join a channel.
    Join { channel: String },

    /// Leave a channel.
    Part { channel: String, reason: String },
}

/// Create a connected effect queue.
pub fn effect_channel() -> (EffectSender, EffectReceiver) {
    mpsc::unbounded_channel()
}

/// Queue an effect; a closed queue is logged and reported as `false`.
pub fn send_effect(effects: &EffectSender, effect: BotEffect) -> bool {
    match effects.send(effect) {
        Ok(()) => true,
        Err(e) => {
            warn!(effect = ?e.0, "Effect queue closed; action dropped");
            false
        }
    }
}
