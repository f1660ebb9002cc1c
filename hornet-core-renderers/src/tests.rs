use std::time::Duration;

use bytes::Bytes;
use hornet_core::{
    error::DropReason,
    session::SessionCounters,
    traits::{FrameProcessor, FrameProperties},
    types::{DecodedFrame, FrameData, RECEPTION_TIME},
};

use crate::{
    ConsolePresenter, FrameStats, MockSignalStrength, Presenter, PresenterProcessor,
    SharedFramePresenter, SignalStrengthProbe, SignalStrengthSource,
};

fn decoded_frame(width: u32, height: u32) -> DecodedFrame {
    DecodedFrame::from_rgba(width, height, vec![255; (width * height * 4) as usize]).unwrap()
}

fn stats(sequence_number: u64, total_bytes: usize) -> FrameStats {
    let mut session = SessionCounters::new();
    session.record_frame(total_bytes);

    FrameStats {
        sequence_number,
        session,
        signal_strength: 42,
        ..Default::default()
    }
}

#[test]
fn mock_signal_strength_stays_in_range() {
    let mut source = MockSignalStrength::seeded(7);
    assert!((0..1000).map(|_| source.sample()).all(|sample| sample < 100));
}

#[test]
fn seeded_mock_signal_strength_is_reproducible() {
    let mut first = MockSignalStrength::seeded(99);
    let mut second = MockSignalStrength::seeded(99);

    let first_samples: Vec<u8> = (0..16).map(|_| first.sample()).collect();
    let second_samples: Vec<u8> = (0..16).map(|_| second.sample()).collect();

    assert_eq!(first_samples, second_samples);
}

#[tokio::test]
async fn probe_stamps_signal_strength() {
    struct Fixed;

    impl SignalStrengthSource for Fixed {
        fn sample(&mut self) -> u8 {
            73
        }
    }

    let mut probe = SignalStrengthProbe::new(Fixed);
    let frame_data = probe.process(FrameData::default()).await.unwrap();

    assert_eq!(frame_data.signal_strength(), Some(73));
}

#[test]
fn console_presenter_counts_rendered_frames() {
    let mut presenter = ConsolePresenter::new()
        .header("test stream")
        .round_duration(Duration::ZERO);

    presenter.present(Some(&decoded_frame(4, 3)), &stats(0, 10));
    presenter.present(None, &stats(1, 20));
    presenter.present(Some(&decoded_frame(8, 6)), &stats(2, 30));

    assert_eq!(presenter.total_presented_frames(), 3);
    assert_eq!(presenter.total_rendered_frames(), 2);
    assert_eq!(presenter.last_resolution(), Some((8, 6)));
}

#[test]
fn shared_presenter_keeps_last_image_across_decode_failures() {
    let mut presenter = SharedFramePresenter::new();
    let receiver = presenter.subscribe();

    assert!(receiver.borrow().is_none());

    presenter.present(Some(&decoded_frame(2, 2)), &stats(0, 100));

    {
        let presented = receiver.borrow();
        let presented = presented.as_ref().unwrap();
        assert!(presented.fresh);
        assert_eq!(presented.image.as_ref().map(|image| image.width()), Some(2));
    }

    presenter.present(None, &stats(1, 250));

    let presented = receiver.borrow();
    let presented = presented.as_ref().unwrap();
    assert!(!presented.fresh);
    assert_eq!(presented.image.as_ref().map(|image| image.width()), Some(2));
    assert_eq!(presented.stats.sequence_number, 1);
    assert_eq!(presented.stats.session.total_bytes_received(), 250);
}

#[tokio::test]
async fn presenter_processor_forwards_frame_stats() {
    let shared = SharedFramePresenter::new();
    let receiver = shared.subscribe();
    let mut processor = PresenterProcessor::new(shared);

    let mut session = SessionCounters::new();
    session.record_frame(5);

    let mut frame_data = FrameData::received(3, Bytes::from_static(b"bytes"), session);
    frame_data.set_signal_strength(64);
    frame_data.set(RECEPTION_TIME, 1200);
    frame_data.set_drop_reason(Some(DropReason::DecodeError));

    processor.process(frame_data).await.unwrap();

    let presented = receiver.borrow();
    let presented = presented.as_ref().unwrap();

    assert!(presented.image.is_none());
    assert_eq!(presented.stats.sequence_number, 3);
    assert_eq!(presented.stats.signal_strength, 64);
    assert_eq!(presented.stats.reception_time, Some(1200));
    assert_eq!(presented.stats.decoding_time, None);
}
