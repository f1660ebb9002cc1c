use std::{collections::HashMap, fmt};

use bytes::Bytes;

use crate::{error::DropReason, session::SessionCounters, traits::FrameProperties};

/// Microseconds spent receiving the frame payload from the connection.
pub const RECEPTION_TIME: &str = "reception_time";
/// Microseconds spent decoding the frame payload.
pub const DECODING_TIME: &str = "decoding_time";

/// A decoded image as tightly packed RGBA8 pixels.
#[derive(Clone, PartialEq, Eq)]
pub struct DecodedFrame {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl DecodedFrame {
    /// Returns `None` if `pixels` does not hold exactly `width * height` RGBA8 pixels.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        let expected_size = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(4)?;

        if pixels.len() != expected_size {
            return None;
        }

        Some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

impl fmt::Debug for DecodedFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedFrame")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

/// The DTO travelling through the processing pipeline, one per received frame.
#[derive(Debug, Default)]
pub struct FrameData {
    sequence_number: u64,

    encoded_frame: Option<Bytes>,
    decoded_frame: Option<DecodedFrame>,

    session: SessionCounters,
    signal_strength: Option<u8>,

    drop_reason: Option<DropReason>,

    stats: HashMap<String, u128>,
}

impl FrameData {
    pub fn received(sequence_number: u64, encoded_frame: Bytes, session: SessionCounters) -> Self {
        Self {
            sequence_number,
            encoded_frame: Some(encoded_frame),
            session,
            ..Default::default()
        }
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn encoded_frame(&self) -> Option<&Bytes> {
        self.encoded_frame.as_ref()
    }

    pub fn decoded_frame(&self) -> Option<&DecodedFrame> {
        self.decoded_frame.as_ref()
    }

    pub fn set_decoded_frame(&mut self, decoded_frame: DecodedFrame) {
        self.decoded_frame = Some(decoded_frame);
    }

    /// Counters as they were right after this frame was received.
    pub fn session(&self) -> SessionCounters {
        self.session
    }

    pub fn signal_strength(&self) -> Option<u8> {
        self.signal_strength
    }

    pub fn set_signal_strength(&mut self, signal_strength: u8) {
        self.signal_strength = Some(signal_strength);
    }

    pub fn drop_reason(&self) -> Option<DropReason> {
        self.drop_reason
    }

    pub fn set_drop_reason(&mut self, drop_reason: Option<DropReason>) {
        self.drop_reason = drop_reason;
    }
}

impl FrameProperties<u128> for FrameData {
    fn set(&mut self, key: &str, value: u128) {
        self.stats.insert(key.to_string(), value);
    }

    fn get(&self, key: &str) -> Option<u128> {
        self.stats.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::DecodedFrame;

    #[test]
    fn decoded_frame_checks_pixel_count() {
        assert!(DecodedFrame::from_rgba(2, 2, vec![0; 16]).is_some());
        assert!(DecodedFrame::from_rgba(2, 2, vec![0; 12]).is_none());
        assert!(DecodedFrame::from_rgba(0, 0, Vec::new()).is_some());
    }
}
