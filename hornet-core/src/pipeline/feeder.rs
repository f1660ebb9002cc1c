use tokio::sync::mpsc::Sender;

pub struct PipelineFeeder<F> {
    sender: Sender<F>,
}

impl<F> PipelineFeeder<F> {
    pub fn new(sender: Sender<F>) -> Self {
        Self { sender }
    }

    /// Waits for a free slot in the head channel. Gives the frame back if the pipeline is gone.
    pub async fn feed(&self, frame_data: F) -> Result<(), F> {
        self.sender.send(frame_data).await.map_err(|error| error.0)
    }
}
