use std::{future::Future, time::Instant};

use hornet_core::{
    error::FramingError,
    pipeline::Pipeline,
    session::SessionCounters,
    traits::FrameProperties,
    types::{FrameData, RECEPTION_TIME},
};
use log::{debug, error, info, warn};
use tokio::io::AsyncRead;

use crate::receiver::FrameReceiver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Framing(FramingError),
    PipelineClosed,
    Shutdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    pub counters: SessionCounters,
    pub end: SessionEnd,
}

/// Drives a receiver and feeds every received frame to a pipeline.
pub struct ReceptionLoop<S> {
    receiver: FrameReceiver<S>,
    session: SessionCounters,
    next_sequence_number: u64,
}

impl<S: AsyncRead + Unpin> ReceptionLoop<S> {
    pub fn new(receiver: FrameReceiver<S>) -> Self {
        Self {
            receiver,
            session: SessionCounters::new(),
            next_sequence_number: 0,
        }
    }

    pub async fn run(self, pipeline: Pipeline<FrameData>) -> SessionReport {
        self.run_until(pipeline, std::future::pending()).await
    }

    /// Receives until the connection fails, the pipeline stops accepting frames or `shutdown`
    /// completes. The connection is closed before returning. The pipeline is drained, except on
    /// shutdown, where its components are aborted.
    pub async fn run_until<D>(mut self, mut pipeline: Pipeline<FrameData>, shutdown: D) -> SessionReport
    where
        D: Future<Output = ()>,
    {
        let feeder = pipeline.get_feeder();
        let handles = pipeline.run();

        tokio::pin!(shutdown);

        let end = match feeder {
            Some(feeder) => loop {
                let reception_start_time = Instant::now();

                let result = tokio::select! {
                    result = self.receiver.receive_next_frame(&mut self.session) => result,
                    _ = &mut shutdown => {
                        info!("Shutdown requested, closing connection");
                        break SessionEnd::Shutdown;
                    }
                };

                match result {
                    Ok(encoded_frame) => {
                        let mut frame_data =
                            FrameData::received(self.next_sequence_number, encoded_frame, self.session);
                        frame_data.set(RECEPTION_TIME, reception_start_time.elapsed().as_micros());
                        self.next_sequence_number += 1;

                        tokio::select! {
                            fed = feeder.feed(frame_data) => {
                                if fed.is_err() {
                                    warn!("Pipeline is no longer accepting frames, closing connection");
                                    break SessionEnd::PipelineClosed;
                                }
                            }
                            _ = &mut shutdown => {
                                info!("Shutdown requested while waiting for the pipeline, closing connection");
                                break SessionEnd::Shutdown;
                            }
                        }
                    }
                    Err(error) => {
                        error!("Framing error, closing connection: {}", error);
                        break SessionEnd::Framing(error);
                    }
                }
            },
            None => {
                error!("Pipeline is not feedable, no frames will be received");
                SessionEnd::PipelineClosed
            }
        };

        drop(self.receiver);

        // A component stuck on a frame never sees the closed channel.
        let abort_pipeline = end == SessionEnd::Shutdown;
        for handle in handles {
            if abort_pipeline {
                handle.abort();
            }

            match handle.await {
                Ok(()) => {}
                Err(error) if error.is_cancelled() => debug!("Pipeline component aborted on shutdown"),
                Err(error) => error!("Pipeline component terminated abnormally: {}", error),
            }
        }

        info!(
            "Session ended after {} frames ({} bytes)",
            self.session.frames_received(),
            self.session.total_bytes_received()
        );

        SessionReport {
            counters: self.session,
            end,
        }
    }
}
