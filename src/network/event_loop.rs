use std::collections::HashMap;

use slircbot_proto::response::{RPL_ENDOFNAMES, RPL_NAMREPLY};
use slircbot_proto::{ChannelExt, Ctcp, Message};
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{debug, info, warn};

use super::{Transport, next_message, send};
use crate::commands::{BotEffect, EffectReceiver};
use crate::error::ConnectionError;
use crate::state::Session;
use crate::text::fold;

/// Body of the CTCP `VERSION` reply.
const CTCP_VERSION: &str = concat!("slircbot ", env!("CARGO_PKG_VERSION"));

/// What to do after handling one message.
enum Flow {
    Continue,
    Quit,
}

/// Process server traffic until a quit effect or end of stream.
///
/// Replies for a line are written before any effects that line queued.
pub async fn run_event_loop<S>(
    transport: &mut Transport<S>,
    session: &mut Session,
    effects: &mut EffectReceiver,
) -> Result<(), ConnectionError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    // NAMES replies arrive in pieces; commit on 366.
    let mut pending_names: HashMap<String, Vec<String>> = HashMap::new();

    loop {
        tokio::select! {
            msg = next_message(transport) => {
                let Some(msg) = msg? else {
                    info!("Server closed the connection");
                    return Err(ConnectionError::Closed);
                };
                handle_message(transport, session, &mut pending_names, msg).await?;
            }
            Some(effect) = effects.recv() => {
                if let Flow::Quit = apply_effect(transport, effect).await? {
                    return Ok(());
                }
            }
        }

        while let Ok(effect) = effects.try_recv() {
            if let Flow::Quit = apply_effect(transport, effect).await? {
                return Ok(());
            }
        }
    }
}

async fn handle_message<S>(
    transport: &mut Transport<S>,
    session: &mut Session,
    pending_names: &mut HashMap<String, Vec<String>>,
    msg: Message,
) -> Result<(), ConnectionError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let source = msg.source_nickname().unwrap_or("");
    match msg.command.as_str() {
        "PING" => send(transport, Message::pong(msg.param(0).unwrap_or(""))).await?,
        RPL_NAMREPLY => {
            // <me> <symbol> <channel> :<names>
            if let (Some(channel), Some(names)) = (msg.param(2), msg.param(3)) {
                pending_names
                    .entry(fold(channel))
                    .or_default()
                    .extend(names.split_whitespace().map(str::to_owned));
            }
        }
        RPL_ENDOFNAMES => {
            if let Some(channel) = msg.param(1) {
                let names = pending_names.remove(&fold(channel)).unwrap_or_default();
                debug!(channel = %channel, count = names.len(), "NAMES complete");
                session.on_names(channel, names);
            }
        }
        "JOIN" => {
            if let Some(channel) = msg.param(0) {
                session.on_join(channel, source);
            }
        }
        "PART" => {
            if let Some(channel) = msg.param(0) {
                session.on_part(channel, source);
            }
        }
        "KICK" => {
            if let (Some(channel), Some(target)) = (msg.param(0), msg.param(1)) {
                if session.is_me(target) {
                    info!(channel = %channel, by = %source, "Kicked");
                }
                session.on_part(channel, target);
            }
        }
        "QUIT" => session.on_quit(source),
        "NICK" => {
            if let Some(new) = msg.param(0) {
                session.on_nick(source, new);
            }
        }
        "PRIVMSG" => {
            if let (Some(target), Some(text)) = (msg.param(0), msg.param(1)) {
                handle_privmsg(transport, session, source, target, text).await?;
            }
        }
        "ERROR" => warn!(reason = msg.param(0).unwrap_or(""), "Server error"),
        _ => {}
    }
    Ok(())
}

async fn handle_privmsg<S>(
    transport: &mut Transport<S>,
    session: &Session,
    sender: &str,
    target: &str,
    text: &str,
) -> Result<(), ConnectionError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    if let Some(ctcp) = Ctcp::parse(text) {
        let reply = match ctcp.command.as_str() {
            "VERSION" => Some(Ctcp::reply("VERSION", CTCP_VERSION)),
            "PING" => Some(Ctcp::reply("PING", ctcp.params.unwrap_or(""))),
            _ => None,
        };
        if let Some(reply) = reply {
            send(transport, Message::notice(sender, reply)).await?;
        }
        return Ok(());
    }

    let (channel, reply_to) = if target.is_channel_name() {
        (Some(target), target)
    } else {
        (None, sender)
    };

    for reply in session.dispatch(channel, sender, text)? {
        send(transport, Message::privmsg(reply_to, reply)).await?;
    }
    Ok(())
}

async fn apply_effect<S>(
    transport: &mut Transport<S>,
    effect: BotEffect,
) -> Result<Flow, ConnectionError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    info!(effect = ?effect, "Applying effect");
    match effect {
        BotEffect::Join { channel } => send(transport, Message::join(channel)).await?,
        BotEffect::Part { channel, reason } => {
            let reason = (!reason.is_empty()).then_some(reason.as_str());
            send(transport, Message::part(channel, reason)).await?;
        }
        BotEffect::Quit { reason } => {
            send(transport, Message::quit(reason)).await?;
            return Ok(Flow::Quit);
        }
    }
    Ok(Flow::Continue)
}
