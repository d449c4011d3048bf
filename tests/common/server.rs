//! Scripted IRC server.
//!
//! Accepts one connection and lets the test read what the bot sends and
//! write what the server says.

use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};
use tokio::net::TcpListener;
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::time::timeout;

/// Listening half before the bot connects.
pub struct FakeServer {
    listener: TcpListener,
}

/// One accepted bot connection.
pub struct FakeConnection {
    reader: BufReader<OwnedReadHalf>,
    writer: BufWriter<OwnedWriteHalf>,
}

impl FakeServer {
    /// Bind on an ephemeral local port.
    pub async fn bind() -> anyhow::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        Ok(Self { listener })
    }

    pub fn port(&self) -> u16 {
        self.listener
            .local_addr()
            .map(|a| a.port())
            .unwrap_or_default()
    }

    /// Wait for the bot to connect.
    pub async fn accept(self) -> anyhow::Result<FakeConnection> {
        let (stream, _) = timeout(Duration::from_secs(5), self.listener.accept()).await??;
        Ok(FakeConnection::new(stream))
    }
}

impl FakeConnection {
    fn new(stream: TcpStream) -> Self {
        let (read_half, write_half) = stream.into_split();
        Self {
            reader: BufReader::new(read_half),
            writer: BufWriter::new(write_half),
        }
    }

    /// Send a raw line to the bot.
    pub async fn send_raw(&mut self, line: &str) -> anyhow::Result<()> {
        self.send_bytes(line.as_bytes()).await
    }

    /// Send a line that need not be UTF-8.
    pub async fn send_bytes(&mut self, line: &[u8]) -> anyhow::Result<()> {
        self.writer.write_all(line).await?;
        self.writer.write_all(b"\r\n").await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Receive one line from the bot, without the line ending.
    pub async fn recv(&mut self) -> anyhow::Result<String> {
        let mut line = String::new();
        let n = timeout(Duration::from_secs(5), self.reader.read_line(&mut line)).await??;
        anyhow::ensure!(n > 0, "bot closed the connection");
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Receive lines until one satisfies `predicate`; returns all of them.
    pub async fn recv_until<F>(&mut self, mut predicate: F) -> anyhow::Result<Vec<String>>
    where
        F: FnMut(&str) -> bool,
    {
        let mut lines = Vec::new();
        loop {
            let line = self.recv().await?;
            let done = predicate(&line);
            lines.push(line);
            if done {
                return Ok(lines);
            }
        }
    }
}
