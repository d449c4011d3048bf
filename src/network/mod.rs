//! IRC client transport.
//!
//! One TCP connection, framed into lines by the protocol crate's codec.
//! [`register`] claims a nick; [`run_event_loop`] then feeds traffic into the
//! [`Session`] until a `quit` effect arrives or the server hangs up.

mod event_loop;
mod handshake;

pub use event_loop::run_event_loop;
pub use handshake::{join_channels, register};

use futures_util::{SinkExt, StreamExt};
use slircbot_proto::{LineCodec, Message};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tokio_util::codec::Framed;
use tracing::{Instrument, debug, info, warn};

use crate::commands::EffectReceiver;
use crate::config::Config;
use crate::error::ConnectionError;
use crate::state::Session;
use crate::telemetry::spans;

/// A line-framed IRC stream.
pub type Transport<S> = Framed<S, LineCodec>;

/// Connect to the configured server and run until the bot quits.
pub async fn connect(
    config: &Config,
    session: &mut Session,
    effects: &mut EffectReceiver,
) -> Result<(), ConnectionError> {
    let host = config.server.host.trim();
    let port = config.server.effective_port();

    connect_and_run(host, port, config, session, effects)
        .instrument(spans::connection(host, port))
        .await
}

async fn connect_and_run(
    host: &str,
    port: u16,
    config: &Config,
    session: &mut Session,
    effects: &mut EffectReceiver,
) -> Result<(), ConnectionError> {
    info!("Connecting");
    let stream = TcpStream::connect((host, port)).await?;
    let mut transport = Framed::new(stream, LineCodec::new());
    run(&mut transport, config, session, effects).await
}

/// Register, join channels, and process traffic on an established stream.
pub async fn run<S>(
    transport: &mut Transport<S>,
    config: &Config,
    session: &mut Session,
    effects: &mut EffectReceiver,
) -> Result<(), ConnectionError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    if !session.is_ready() {
        return Err(crate::error::SessionError::NotReady.into());
    }

    let nick = register(transport, &config.server).await?;
    info!(nick = %nick, "Registered");
    session.set_nick(&nick);

    join_channels(transport, &config.server).await?;
    run_event_loop(transport, session, effects).await
}

/// Write one message.
pub(crate) async fn send<S>(
    transport: &mut Transport<S>,
    message: Message,
) -> Result<(), ConnectionError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    debug!(command = %message.command, "Sending");
    transport.send(message.to_string()).await?;
    Ok(())
}

/// Read the next parseable message; `None` when the server closes the stream.
pub(crate) async fn next_message<S>(
    transport: &mut Transport<S>,
) -> Result<Option<Message>, ConnectionError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    while let Some(line) = transport.next().await {
        let line = line?;
        match line.parse::<Message>() {
            Ok(message) => return Ok(Some(message)),
            Err(e) => warn!(line = %line, error = %e, "Ignoring unparseable line"),
        }
    }
    Ok(None)
}
