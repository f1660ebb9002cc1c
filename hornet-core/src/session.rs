/// Cumulative counters of a receiving session.
///
/// The value is owned by whoever drives the receiver and is only ever incremented
/// by successfully received frames.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionCounters {
    total_bytes_received: u64,
    frames_received: u64,
}

impl SessionCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_frame(&mut self, frame_size: usize) {
        self.total_bytes_received += frame_size as u64;
        self.frames_received += 1;
    }

    pub fn total_bytes_received(&self) -> u64 {
        self.total_bytes_received
    }

    pub fn frames_received(&self) -> u64 {
        self.frames_received
    }
}

#[cfg(test)]
mod tests {
    use super::SessionCounters;

    #[test]
    fn record_frame_accumulates() {
        let mut counters = SessionCounters::new();
        counters.record_frame(10);
        counters.record_frame(32);

        assert_eq!(counters.total_bytes_received(), 42);
        assert_eq!(counters.frames_received(), 2);
    }
}
