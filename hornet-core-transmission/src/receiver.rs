use std::{io, time::Duration};

use bytes::{Bytes, BytesMut};
use hornet_core::{error::FramingError, session::SessionCounters};
use log::{debug, warn};
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::header::{decode_frame_header, FRAME_HEADER_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiverState {
    Idle,
    ReadingHeader,
    ReadingPayload { expected: usize },
    Failed,
}

/// Turns a byte stream into a sequence of bounded frame payloads.
///
/// The receiver owns the stream. Once a frame fails to be received the stream can no
/// longer be trusted to be aligned on a frame boundary, so the receiver stays in
/// [`ReceiverState::Failed`] and refuses further reads. A receive call dropped before
/// completing leaves the stream mid-frame and has the same effect.
pub struct FrameReceiver<S> {
    stream: S,
    max_frame_size: u32,
    read_timeout: Option<Duration>,
    state: ReceiverState,
}

impl<S: AsyncRead + Unpin> FrameReceiver<S> {
    pub fn new(stream: S, max_frame_size: u32) -> Self {
        Self {
            stream,
            max_frame_size,
            read_timeout: None,
            state: ReceiverState::Idle,
        }
    }

    /// Bounds every single read call, not the whole frame.
    pub fn with_read_timeout(mut self, read_timeout: Option<Duration>) -> Self {
        self.read_timeout = read_timeout;
        self
    }

    pub fn state(&self) -> ReceiverState {
        self.state
    }

    pub fn max_frame_size(&self) -> u32 {
        self.max_frame_size
    }

    pub fn into_inner(self) -> S {
        self.stream
    }

    /// Receives the next complete frame payload, recording it in `session` on success.
    pub async fn receive_next_frame(
        &mut self,
        session: &mut SessionCounters,
    ) -> Result<Bytes, FramingError> {
        match self.state {
            ReceiverState::Idle => {}
            ReceiverState::Failed => return Err(FramingError::ReceiverFailed),
            abandoned => {
                warn!("Previous receive was cancelled while {:?}, stream is desynchronized", abandoned);
                self.state = ReceiverState::Failed;
                return Err(FramingError::ReceiverFailed);
            }
        }

        match self.receive_frame().await {
            Ok(frame) => {
                self.state = ReceiverState::Idle;
                session.record_frame(frame.len());
                debug!(
                    "Received frame of {} bytes (total bytes received: {})",
                    frame.len(),
                    session.total_bytes_received()
                );
                Ok(frame)
            }
            Err(error) => {
                self.state = ReceiverState::Failed;
                Err(error)
            }
        }
    }

    async fn receive_frame(&mut self) -> Result<Bytes, FramingError> {
        self.state = ReceiverState::ReadingHeader;
        let frame_size = self.receive_frame_header().await?;

        self.state = ReceiverState::ReadingPayload {
            expected: frame_size,
        };
        self.receive_frame_payload(frame_size).await
    }

    async fn receive_frame_header(&mut self) -> Result<usize, FramingError> {
        debug!("Receiving frame header...");

        let mut header = [0u8; FRAME_HEADER_SIZE];
        let received = self.fill(&mut header).await;

        if received < FRAME_HEADER_SIZE {
            return Err(FramingError::HeaderIncomplete(received));
        }

        let frame_size = decode_frame_header(header);
        if frame_size == 0 || frame_size > self.max_frame_size {
            return Err(FramingError::InvalidLength(frame_size));
        }

        Ok(frame_size as usize)
    }

    async fn receive_frame_payload(&mut self, frame_size: usize) -> Result<Bytes, FramingError> {
        debug!("Receiving {} encoded frame bytes...", frame_size);

        let mut buffer = BytesMut::with_capacity(frame_size);
        buffer.resize(frame_size, 0);

        let received = self.fill(&mut buffer).await;
        if received < frame_size {
            return Err(FramingError::PayloadTruncated(received, frame_size));
        }

        Ok(buffer.freeze())
    }

    /// Reads into `buffer` until it is full or the stream stops yielding bytes.
    /// Returns how many bytes were accumulated.
    async fn fill(&mut self, buffer: &mut [u8]) -> usize {
        let mut total_read_bytes = 0;

        while total_read_bytes < buffer.len() {
            match self.read_chunk(&mut buffer[total_read_bytes..]).await {
                Ok(0) => {
                    debug!("Stream closed after {} of {} bytes", total_read_bytes, buffer.len());
                    break;
                }
                Ok(read_bytes) => {
                    debug!("Received {} bytes", read_bytes);
                    total_read_bytes += read_bytes;
                }
                Err(error) if error.kind() == io::ErrorKind::Interrupted => continue,
                Err(error) => {
                    warn!(
                        "Read failed after {} of {} bytes: {}",
                        total_read_bytes,
                        buffer.len(),
                        error
                    );
                    break;
                }
            }
        }

        total_read_bytes
    }

    async fn read_chunk(&mut self, chunk: &mut [u8]) -> io::Result<usize> {
        match self.read_timeout {
            Some(read_timeout) => tokio::time::timeout(read_timeout, self.stream.read(chunk))
                .await
                .map_err(|_| io::Error::new(io::ErrorKind::TimedOut, "read timed out"))?,
            None => self.stream.read(chunk).await,
        }
    }
}
