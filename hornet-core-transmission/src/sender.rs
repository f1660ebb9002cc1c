use std::io;

use log::debug;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::header::{encode_frame_header, FRAME_HEADER_SIZE};

/// Writes payloads with the same length-prefixed framing the receiver expects.
pub struct FrameSender<S> {
    stream: S,
}

impl<S: AsyncWrite + Unpin> FrameSender<S> {
    pub fn new(stream: S) -> Self {
        Self { stream }
    }

    pub fn into_inner(self) -> S {
        self.stream
    }

    async fn send_frame_header(&mut self, frame_size: u32) -> io::Result<()> {
        debug!("Sending frame header with size {}...", frame_size);
        self.stream.write_all(&encode_frame_header(frame_size)).await
    }

    /// Returns the number of bytes written, header included.
    pub async fn send_frame(&mut self, payload: &[u8]) -> io::Result<usize> {
        if payload.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "empty frames cannot be framed",
            ));
        }

        let frame_size = u32::try_from(payload.len()).map_err(|_| {
            io::Error::new(io::ErrorKind::InvalidInput, "frame does not fit a 4-byte header")
        })?;

        self.send_frame_header(frame_size).await?;
        self.stream.write_all(payload).await?;
        self.stream.flush().await?;

        Ok(FRAME_HEADER_SIZE + payload.len())
    }
}
