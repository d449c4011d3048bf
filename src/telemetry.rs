//! Telemetry utilities for command timing and span construction.

use std::time::Instant;

use tracing::debug;

/// Guard for timing one command invocation.
///
/// Logs the elapsed time at debug level when dropped.
pub struct CommandTimer {
    command: String,
    start: Instant,
}

impl CommandTimer {
    /// Start timing a command.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            start: Instant::now(),
        }
    }
}

impl Drop for CommandTimer {
    fn drop(&mut self) {
        let elapsed_us = self.start.elapsed().as_micros() as u64;
        debug!(command = %self.command, elapsed_us, "Command finished");
    }
}

/// Standardized span constructors.
pub mod spans {
    use tracing::{Span, info_span};

    /// Span for the connection to one server.
    pub fn connection(host: &str, port: u16) -> Span {
        info_span!("connection", host = %host, port)
    }
}
