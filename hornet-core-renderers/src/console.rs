use std::time::{Duration, Instant};

use hornet_core::types::DecodedFrame;
use log::info;

use crate::presenter::{FrameStats, Presenter};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct RoundStats {
    presented_frames: u64,
    rendered_frames: u64,

    reception_times: (u128, u64),
    decoding_times: (u128, u64),
}

impl RoundStats {
    fn average(&(sum, count): &(u128, u64)) -> Option<u128> {
        (count > 0).then(|| sum / count as u128)
    }
}

/// Logs the stream stats once per round instead of once per frame.
pub struct ConsolePresenter {
    header: Option<String>,
    round_duration: Duration,

    current_round_start: Instant,
    round: RoundStats,

    last_stats: Option<FrameStats>,
    last_resolution: Option<(u32, u32)>,

    total_presented_frames: u64,
    total_rendered_frames: u64,
}

impl Default for ConsolePresenter {
    fn default() -> Self {
        Self {
            header: None,
            round_duration: Duration::from_secs(1),

            current_round_start: Instant::now(),
            round: RoundStats::default(),

            last_stats: None,
            last_resolution: None,

            total_presented_frames: 0,
            total_rendered_frames: 0,
        }
    }
}

impl ConsolePresenter {
    pub fn new() -> Self {
        Self::default()
    }

    // Building functions
    pub fn header(mut self, header: &str) -> Self {
        self.header = Some(header.to_string());
        self
    }

    pub fn round_duration(mut self, round_duration: Duration) -> Self {
        self.round_duration = round_duration;
        self
    }

    pub fn total_presented_frames(&self) -> u64 {
        self.total_presented_frames
    }

    pub fn total_rendered_frames(&self) -> u64 {
        self.total_rendered_frames
    }

    pub fn last_resolution(&self) -> Option<(u32, u32)> {
        self.last_resolution
    }

    // Logging functions
    fn print_round_stats(&self) {
        if let Some(header) = &self.header {
            info!("{}", header);
        }

        if let Some(stats) = &self.last_stats {
            info!("Signal Strength: {}%", stats.signal_strength);
            info!("Total Bytes Received: {}", stats.session.total_bytes_received());
        }

        info!(
            "Rendered {} of {} presented frames",
            self.round.rendered_frames, self.round.presented_frames
        );

        if let Some((width, height)) = self.last_resolution {
            info!("Video stream: {}x{}", width, height);
        }

        if let Some(avg) = RoundStats::average(&self.round.reception_times) {
            info!("Average reception time: {}us", avg);
        }

        if let Some(avg) = RoundStats::average(&self.round.decoding_times) {
            info!("Average decoding time: {}us", avg);
        }
    }

    fn reset_round(&mut self) {
        self.round = RoundStats::default();
        self.current_round_start = Instant::now();
    }
}

impl Presenter for ConsolePresenter {
    fn present(&mut self, frame: Option<&DecodedFrame>, stats: &FrameStats) {
        self.round.presented_frames += 1;
        self.total_presented_frames += 1;

        if let Some(frame) = frame {
            self.round.rendered_frames += 1;
            self.total_rendered_frames += 1;
            self.last_resolution = Some((frame.width(), frame.height()));
        }

        if let Some(reception_time) = stats.reception_time {
            self.round.reception_times.0 += reception_time;
            self.round.reception_times.1 += 1;
        }

        if let Some(decoding_time) = stats.decoding_time {
            self.round.decoding_times.0 += decoding_time;
            self.round.decoding_times.1 += 1;
        }

        self.last_stats = Some(*stats);

        if self.current_round_start.elapsed() >= self.round_duration {
            self.print_round_stats();
            self.reset_round();
        }
    }
}
