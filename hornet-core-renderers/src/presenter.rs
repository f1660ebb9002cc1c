use async_trait::async_trait;
use hornet_core::{
    session::SessionCounters,
    traits::{FrameProcessor, FrameProperties},
    types::{DecodedFrame, FrameData, DECODING_TIME, RECEPTION_TIME},
};

/// Stats shown next to every frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    pub sequence_number: u64,
    pub session: SessionCounters,
    pub signal_strength: u8,

    pub reception_time: Option<u128>,
    pub decoding_time: Option<u128>,
}

impl FrameStats {
    pub fn of(frame_data: &FrameData) -> Self {
        Self {
            sequence_number: frame_data.sequence_number(),
            session: frame_data.session(),
            signal_strength: frame_data.signal_strength().unwrap_or_default(),

            reception_time: frame_data.get(RECEPTION_TIME),
            decoding_time: frame_data.get(DECODING_TIME),
        }
    }
}

/// Displays a frame. `frame` is `None` when the payload could not be decoded,
/// in which case only the stats are refreshed.
pub trait Presenter {
    fn present(&mut self, frame: Option<&DecodedFrame>, stats: &FrameStats);
}

/// Runs a [`Presenter`] as the last stage of a pipeline.
pub struct PresenterProcessor<P> {
    presenter: P,
}

impl<P: Presenter> PresenterProcessor<P> {
    pub fn new(presenter: P) -> Self {
        Self { presenter }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }
}

#[async_trait]
impl<P: Presenter + Send> FrameProcessor<FrameData> for PresenterProcessor<P> {
    async fn process(&mut self, frame_data: FrameData) -> Option<FrameData> {
        let stats = FrameStats::of(&frame_data);
        self.presenter.present(frame_data.decoded_frame(), &stats);
        Some(frame_data)
    }
}
