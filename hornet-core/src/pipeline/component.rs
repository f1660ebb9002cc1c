use log::{debug, warn};
use tokio::{
    sync::mpsc::{Receiver, Sender},
    task::JoinHandle,
};

use crate::traits::FrameProcessor;

macro_rules! tagged {
    ($self:ident, $msg:tt) => {{
        format!("[{}] {}", $self.tag.as_deref().unwrap_or(""), $msg)
    }};
}

/// A chain of processors executed sequentially on a single task.
pub struct Component<F> {
    processors: Vec<Box<dyn FrameProcessor<F> + Send>>,

    receiver: Option<Receiver<F>>,
    sender: Option<Sender<F>>,

    tag: Option<String>,
}

impl<F: Send + 'static> Component<F> {
    pub fn new() -> Self {
        Self {
            processors: Vec::new(),
            receiver: None,
            sender: None,
            tag: None,
        }
    }

    pub fn singleton<T: 'static + FrameProcessor<F> + Send>(processor: T) -> Self {
        Self::new().append(processor)
    }

    pub fn append<T: 'static + FrameProcessor<F> + Send>(mut self, processor: T) -> Self {
        self.processors.push(Box::new(processor));
        self
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_string());
        self
    }

    //////////////////////
    // Internal methods //
    //////////////////////

    pub(crate) fn set_sender(&mut self, sender: Sender<F>) {
        self.sender = Some(sender);
    }

    pub(crate) fn set_receiver(&mut self, receiver: Receiver<F>) {
        self.receiver = Some(receiver);
    }

    pub(crate) fn launch(mut self) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut receiver = match self.receiver.take() {
                Some(receiver) => receiver,
                None => {
                    warn!("{}", tagged!(self, "No receiver registered, component not started"));
                    return;
                }
            };

            while let Some(frame_data) = receiver.recv().await {
                let mut frame_data = Some(frame_data);

                for processor in &mut self.processors {
                    match frame_data.take() {
                        Some(current) => frame_data = processor.process(current).await,
                        None => break,
                    }
                }

                if let (Some(sender), Some(frame_data)) = (self.sender.as_ref(), frame_data) {
                    if sender.send(frame_data).await.is_err() {
                        debug!("{}", tagged!(self, "Downstream closed, stopping"));
                        return;
                    }
                }
            }

            debug!("{}", tagged!(self, "Receive channel closed, stopping"));
        })
    }
}

impl<F: Send + 'static> Default for Component<F> {
    fn default() -> Self {
        Self::new()
    }
}
