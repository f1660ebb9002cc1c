use std::sync::Arc;

use hornet_core::types::DecodedFrame;
use log::debug;
use tokio::sync::watch;

use crate::presenter::{FrameStats, Presenter};

/// The latest state a front-end should display.
#[derive(Debug, Clone)]
pub struct PresentedFrame {
    /// The last successfully decoded image, kept across frames that failed to decode.
    pub image: Option<Arc<DecodedFrame>>,
    /// Whether `image` was decoded from the frame these stats belong to.
    pub fresh: bool,
    pub stats: FrameStats,
}

/// Hands the latest frame over to another thread, typically a UI loop uploading it as a texture.
///
/// Subscribers only ever see the most recent frame; frames they did not pick up in time are skipped.
pub struct SharedFramePresenter {
    sender: watch::Sender<Option<PresentedFrame>>,
    last_image: Option<Arc<DecodedFrame>>,
}

impl Default for SharedFramePresenter {
    fn default() -> Self {
        let (sender, _) = watch::channel(None);

        Self {
            sender,
            last_image: None,
        }
    }
}

impl SharedFramePresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<PresentedFrame>> {
        self.sender.subscribe()
    }
}

impl Presenter for SharedFramePresenter {
    fn present(&mut self, frame: Option<&DecodedFrame>, stats: &FrameStats) {
        if let Some(frame) = frame {
            self.last_image = Some(Arc::new(frame.clone()));
        }

        debug!("Publishing frame {}", stats.sequence_number);

        self.sender.send_replace(Some(PresentedFrame {
            image: self.last_image.clone(),
            fresh: frame.is_some(),
            stats: *stats,
        }));
    }
}
