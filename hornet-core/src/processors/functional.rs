use async_trait::async_trait;

use crate::traits::FrameProcessor;

/// Wraps a plain closure into a processor.
pub struct Function<C> {
    function: C,
}

impl<C> Function<C> {
    pub fn new(function: C) -> Self {
        Self { function }
    }
}

#[async_trait]
impl<F, C> FrameProcessor<F> for Function<C>
where
    F: Send + 'static,
    C: FnMut(F) -> Option<F> + Send,
{
    async fn process(&mut self, frame_data: F) -> Option<F> {
        (self.function)(frame_data)
    }
}
