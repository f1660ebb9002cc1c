use std::time::Duration;

use clap::Parser;
use hornet::{
    codecs::ImageDecoder,
    pipeline::{component::Component, Pipeline},
    render::{ConsolePresenter, MockSignalStrength, PresenterProcessor, SignalStrengthProbe},
    transmission::{connect, ReceiverConfiguration, ReceptionLoop, SessionEnd},
    types::FrameData,
};
use log::{error, info};

#[derive(Parser)]
#[clap(version = "0.1.0", about = "Displays a length-prefixed stream of compressed frames")]
struct Options {
    #[clap(long, default_value = "127.0.0.1")]
    server_host: String,

    #[clap(long, default_value = "8080")]
    server_port: u16,

    #[clap(long, default_value = "150000")]
    max_frame_size: u32,

    /// Per-read timeout; 0 waits forever
    #[clap(long, default_value = "0")]
    read_timeout_ms: u64,

    #[clap(long, default_value = "5000")]
    connect_timeout_ms: u64,

    #[clap(long, default_value = "1")]
    queue_capacity: usize,

    #[clap(long, default_value = "1000")]
    stats_interval_ms: u64,
}

fn millis(value: u64) -> Option<Duration> {
    (value > 0).then(|| Duration::from_millis(value))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let options = Options::parse();

    let config = ReceiverConfiguration {
        server_host: options.server_host,
        server_port: options.server_port,
        max_frame_size: options.max_frame_size,
        read_timeout: millis(options.read_timeout_ms),
        connect_timeout: millis(options.connect_timeout_ms),
    };

    let receiver = connect(&config).await?;

    let pipeline = Pipeline::<FrameData>::new()
        .link(
            Component::new()
                .append(SignalStrengthProbe::new(MockSignalStrength::new()))
                .append(ImageDecoder::new())
                .tag("decode"),
        )
        .link(
            Component::singleton(PresenterProcessor::new(
                ConsolePresenter::new()
                    .header(&format!("Stream from {}", config.server_address()))
                    .round_duration(Duration::from_millis(options.stats_interval_ms)),
            ))
            .tag("present"),
        )
        .channel_capacity(options.queue_capacity)
        .tag("viewer")
        .feedable();

    let shutdown = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            error!("Unable to listen for Ctrl-C: {}", error);
            std::future::pending::<()>().await;
        }
    };

    let report = ReceptionLoop::new(receiver).run_until(pipeline, shutdown).await;

    info!(
        "Received {} frames, {} bytes in total",
        report.counters.frames_received(),
        report.counters.total_bytes_received()
    );

    match report.end {
        SessionEnd::Framing(error) => Err(error.into()),
        SessionEnd::PipelineClosed | SessionEnd::Shutdown => Ok(()),
    }
}
