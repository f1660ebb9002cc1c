use std::time::Instant;

use async_trait::async_trait;
use hornet_core::{
    error::DropReason,
    traits::{FrameProcessor, FrameProperties},
    types::{DecodedFrame, FrameData, DECODING_TIME},
};
use image::ImageFormat;
use log::{debug, warn};

/// Decodes compressed still images (JPEG, PNG) into [`DecodedFrame`]s.
///
/// Frames that fail to decode are not dropped: they are tagged with
/// [`DropReason::DecodeError`] and keep flowing so that their stats can still be presented.
#[derive(Debug, Default)]
pub struct ImageDecoder {
    format: Option<ImageFormat>,
}

impl ImageDecoder {
    /// Guesses the format of every payload from its magic bytes.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(format: ImageFormat) -> Self {
        Self {
            format: Some(format),
        }
    }

    pub fn decode(&self, encoded_frame: &[u8]) -> Result<DecodedFrame, DropReason> {
        let result = match self.format {
            Some(format) => image::load_from_memory_with_format(encoded_frame, format),
            None => image::load_from_memory(encoded_frame),
        };

        let image = result.map_err(|error| {
            warn!("Unable to decode {} bytes: {}", encoded_frame.len(), error);
            DropReason::DecodeError
        })?;

        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();

        DecodedFrame::from_rgba(width, height, rgba.into_raw()).ok_or(DropReason::DecodeError)
    }
}

#[async_trait]
impl FrameProcessor<FrameData> for ImageDecoder {
    async fn process(&mut self, mut frame_data: FrameData) -> Option<FrameData> {
        let decoding_start_time = Instant::now();

        let result = match frame_data.encoded_frame() {
            Some(encoded_frame) => {
                debug!("Decoding {} received bytes", encoded_frame.len());
                self.decode(encoded_frame)
            }
            None => Err(DropReason::NoEncodedFrame),
        };

        match result {
            Ok(decoded_frame) => frame_data.set_decoded_frame(decoded_frame),
            Err(drop_reason) => frame_data.set_drop_reason(Some(drop_reason)),
        }

        frame_data.set(DECODING_TIME, decoding_start_time.elapsed().as_micros());

        Some(frame_data)
    }
}
