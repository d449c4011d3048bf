//! Line-based codec for tokio.
//!
//! Reads newline-terminated lines (with or without `\r`) and writes
//! already-framed strings verbatim. Bytes that are not UTF-8 are replaced
//! with U+FFFD; lines over the length limit are dropped whole.

use bytes::BytesMut;
use tokio_util::codec::{Decoder, Encoder};
use tracing::warn;

use crate::error;

/// IRC line limit including the trailing CRLF.
pub const DEFAULT_MAX_LEN: usize = 512;

/// Line-based codec that handles newline-terminated messages.
///
/// Decoded lines have their `\r\n` removed. Neither bad encoding nor an
/// overlong line is an error; the stream keeps going.
pub struct LineCodec {
    /// Index of next byte to check for newline
    next_index: usize,
    /// Maximum line length
    max_len: usize,
    /// Inside an overlong line; skip through its newline.
    discarding: bool,
}

impl LineCodec {
    /// Create a codec with the default 512-byte limit.
    pub fn new() -> Self {
        Self::with_max_len(DEFAULT_MAX_LEN)
    }

    /// Create a new codec with custom max line length.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            next_index: 0,
            max_len,
            discarding: false,
        }
    }
}

impl Default for LineCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for LineCodec {
    type Item = String;
    type Error = error::ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> error::Result<Option<String>> {
        loop {
            let Some(offset) = src[self.next_index..].iter().position(|b| *b == b'\n') else {
                if self.discarding || src.len() > self.max_len {
                    if !self.discarding {
                        warn!(limit = self.max_len, "Dropping overlong line");
                        self.discarding = true;
                    }
                    src.clear();
                    self.next_index = 0;
                } else {
                    // No complete line yet - remember where we stopped
                    self.next_index = src.len();
                }
                return Ok(None);
            };

            let line = src.split_to(self.next_index + offset + 1);
            self.next_index = 0;

            if self.discarding {
                self.discarding = false;
                continue;
            }
            if line.len() > self.max_len {
                warn!(actual = line.len(), limit = self.max_len, "Dropping overlong line");
                continue;
            }

            let data = String::from_utf8_lossy(&line);
            return Ok(Some(data.trim_end_matches(['\r', '\n']).to_owned()));
        }
    }
}

impl Encoder<String> for LineCodec {
    type Error = error::ProtocolError;

    fn encode(&mut self, msg: String, dst: &mut BytesMut) -> error::Result<()> {
        dst.extend_from_slice(msg.as_bytes());
        Ok(())
    }
}
