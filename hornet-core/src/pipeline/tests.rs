use std::sync::{Arc, Mutex};

use crate::{
    pipeline::{component::Component, Pipeline},
    processors::functional::Function,
};

fn collector(collected: &Arc<Mutex<Vec<u32>>>) -> Function<impl FnMut(u32) -> Option<u32> + Send> {
    let collected = collected.clone();
    Function::new(move |value| {
        collected.lock().unwrap().push(value);
        Some(value)
    })
}

#[tokio::test]
async fn frames_flow_through_components_in_order() {
    let collected = Arc::new(Mutex::new(Vec::new()));

    let mut pipeline = Pipeline::new()
        .link(Component::singleton(Function::new(|value: u32| Some(value * 2))).tag("double"))
        .link(
            Component::new()
                .append(Function::new(|value: u32| Some(value + 1)))
                .append(collector(&collected))
                .tag("collect"),
        )
        .tag("test")
        .feedable();

    let feeder = pipeline.get_feeder().unwrap();
    let handles = pipeline.run();

    for value in 0..5 {
        feeder.feed(value).await.unwrap();
    }
    drop(feeder);

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(*collected.lock().unwrap(), vec![1, 3, 5, 7, 9]);
}

#[tokio::test]
async fn dropped_frames_skip_remaining_processors() {
    let collected = Arc::new(Mutex::new(Vec::new()));

    let mut pipeline = Pipeline::singleton(
        Component::new()
            .append(Function::new(|value: u32| (value % 2 == 0).then_some(value)))
            .append(collector(&collected)),
    )
    .feedable();

    let feeder = pipeline.get_feeder().unwrap();
    let handles = pipeline.run();

    for value in 0..6 {
        feeder.feed(value).await.unwrap();
    }
    drop(feeder);

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(*collected.lock().unwrap(), vec![0, 2, 4]);
}

#[tokio::test]
async fn feeder_requires_feedable_pipeline() {
    let mut pipeline: Pipeline<u32> =
        Pipeline::singleton(Component::singleton(Function::new(Some::<u32>)));

    assert!(pipeline.get_feeder().is_none());

    let mut empty = Pipeline::<u32>::new().feedable();
    assert!(empty.get_feeder().is_none());
}

#[tokio::test]
async fn feed_returns_frame_when_pipeline_is_gone() {
    let mut pipeline = Pipeline::singleton(Component::singleton(Function::new(Some::<u32>)))
        .channel_capacity(0)
        .feedable();

    let feeder = pipeline.get_feeder().unwrap();
    drop(pipeline);

    assert_eq!(feeder.feed(7).await, Err(7));
}
