use slircbot_proto::Message;
use slircbot_proto::response::{ERR_ERRONEUSNICKNAME, ERR_NICKNAMEINUSE, RPL_WELCOME};
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{info, warn};

use super::{Transport, next_message, send};
use crate::config::ServerConfig;
use crate::error::ConnectionError;

/// Claim the first nick the server accepts.
///
/// Sends `NICK`/`USER`, then walks the configured nicks on `433`/`432`
/// until `001` arrives. Returns the nick the server welcomed us as.
pub async fn register<S>(
    transport: &mut Transport<S>,
    server: &ServerConfig,
) -> Result<String, ConnectionError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let nicks = server.nicks();
    let mut candidates = nicks.iter();
    let Some(mut current) = candidates.next() else {
        return Err(ConnectionError::NickUnavailable);
    };

    send(transport, Message::nick(current.as_str())).await?;
    send(transport, Message::user(server.username(), server.realname())).await?;

    while let Some(msg) = next_message(transport).await? {
        match msg.command.as_str() {
            "PING" => send(transport, Message::pong(msg.param(0).unwrap_or(""))).await?,
            ERR_NICKNAMEINUSE | ERR_ERRONEUSNICKNAME => {
                warn!(nick = %current, code = %msg.command, "Nick rejected");
                current = candidates.next().ok_or(ConnectionError::NickUnavailable)?;
                send(transport, Message::nick(current.as_str())).await?;
            }
            RPL_WELCOME => {
                let nick = msg.param(0).unwrap_or(current.as_str());
                return Ok(nick.to_owned());
            }
            "ERROR" => {
                warn!(reason = msg.param(0).unwrap_or(""), "Server refused registration");
                return Err(ConnectionError::Closed);
            }
            _ => {}
        }
    }

    Err(ConnectionError::Closed)
}

/// Identify with NickServ when a password is configured, then join channels.
pub async fn join_channels<S>(
    transport: &mut Transport<S>,
    server: &ServerConfig,
) -> Result<(), ConnectionError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let password = server.nickserv_password();
    if !password.is_empty() {
        info!("Identifying with NickServ");
        send(
            transport,
            Message::privmsg("NickServ", format!("IDENTIFY {password}")),
        )
        .await?;
    }

    for channel in server.channels() {
        info!(channel = %channel, "Joining");
        send(transport, Message::join(channel)).await?;
    }
    Ok(())
}
