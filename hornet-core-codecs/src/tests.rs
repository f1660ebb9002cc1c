use std::io::Cursor;

use bytes::Bytes;
use hornet_core::{
    error::DropReason,
    session::SessionCounters,
    traits::{FrameProcessor, FrameProperties},
    types::{FrameData, DECODING_TIME},
};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use crate::ImageDecoder;

fn encode_test_image(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let image = RgbaImage::from_pixel(width, height, Rgba([200, 10, 30, 255]));
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(image)
        .write_to(&mut Cursor::new(&mut bytes), format)
        .unwrap();
    bytes
}

fn received_frame(payload: Vec<u8>) -> FrameData {
    let mut session = SessionCounters::new();
    session.record_frame(payload.len());
    FrameData::received(0, Bytes::from(payload), session)
}

#[test]
fn decodes_png_to_rgba() {
    let decoder = ImageDecoder::new();

    let decoded = decoder
        .decode(&encode_test_image(3, 2, ImageFormat::Png))
        .unwrap();

    assert_eq!((decoded.width(), decoded.height()), (3, 2));
    assert_eq!(decoded.pixels().len(), 3 * 2 * 4);
    assert_eq!(&decoded.pixels()[..4], &[200, 10, 30, 255]);
}

#[test]
fn forced_format_rejects_other_formats() {
    let decoder = ImageDecoder::with_format(ImageFormat::Jpeg);

    assert_eq!(
        decoder.decode(&encode_test_image(2, 2, ImageFormat::Png)),
        Err(DropReason::DecodeError)
    );
}

#[tokio::test]
async fn processor_attaches_decoded_frame() {
    let mut decoder = ImageDecoder::new();

    let frame_data = decoder
        .process(received_frame(encode_test_image(4, 4, ImageFormat::Png)))
        .await
        .unwrap();

    assert_eq!(frame_data.decoded_frame().map(|frame| frame.width()), Some(4));
    assert_eq!(frame_data.drop_reason(), None);
    assert!(frame_data.get(DECODING_TIME).is_some());
}

#[tokio::test]
async fn garbage_payload_is_tagged_not_dropped() {
    let mut decoder = ImageDecoder::new();

    let frame_data = decoder
        .process(received_frame(b"definitely not an image".to_vec()))
        .await
        .expect("decode failures must not drop the frame");

    assert!(frame_data.decoded_frame().is_none());
    assert_eq!(frame_data.drop_reason(), Some(DropReason::DecodeError));
    assert_eq!(frame_data.session().total_bytes_received(), 23);
}
