use async_trait::async_trait;

/// A single stage of a pipeline component. Returning `None` drops the frame.
#[async_trait]
pub trait FrameProcessor<F> {
    async fn process(&mut self, frame_data: F) -> Option<F>;
}

pub trait FrameProperties<T> {
    fn set(&mut self, key: &str, value: T);
    fn get(&self, key: &str) -> Option<T>;
}
