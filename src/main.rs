//! slircbot - Straylight IRC command bot.

use slircbot::commands::{BotEffect, send_effect};
use slircbot::{Config, Session, network};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    let config = Config::load(&config_path).map_err(|e| {
        error!(path = %config_path, error = %e, "Failed to load config");
        e
    })?;

    let (mut session, mut effects) = Session::new();
    session.configure(&config).map_err(|e| {
        error!(path = %config_path, error = %e, "Invalid configuration");
        e
    })?;

    info!(
        host = %config.server.host,
        port = config.server.effective_port(),
        version = env!("CARGO_PKG_VERSION"),
        "Starting slircbot"
    );

    // Ctrl-C asks the event loop to quit like the core command would.
    let quit = session.effects().clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, quitting");
            send_effect(
                &quit,
                BotEffect::Quit {
                    reason: "Interrupted".to_string(),
                },
            );
        }
    });

    if let Err(e) = network::connect(&config, &mut session, &mut effects).await {
        error!(error = %e, code = e.error_code(), "Connection ended");
        return Err(e.into());
    }

    info!("Shutdown complete");
    Ok(())
}
