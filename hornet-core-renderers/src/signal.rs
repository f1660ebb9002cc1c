use async_trait::async_trait;
use hornet_core::{traits::FrameProcessor, types::FrameData};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Link quality in percent, `0..=100`.
pub trait SignalStrengthSource {
    fn sample(&mut self) -> u8;
}

/// Uniformly random strength in `0..100`, for links that do not report one.
pub struct MockSignalStrength {
    rng: StdRng,
}

impl MockSignalStrength {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for MockSignalStrength {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalStrengthSource for MockSignalStrength {
    fn sample(&mut self) -> u8 {
        self.rng.gen_range(0..100)
    }
}

/// Stamps every frame with the current signal strength.
pub struct SignalStrengthProbe<S> {
    source: S,
}

impl<S: SignalStrengthSource> SignalStrengthProbe<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<S: SignalStrengthSource + Send> FrameProcessor<FrameData> for SignalStrengthProbe<S> {
    async fn process(&mut self, mut frame_data: FrameData) -> Option<FrameData> {
        frame_data.set_signal_strength(self.source.sample().min(100));
        Some(frame_data)
    }
}
