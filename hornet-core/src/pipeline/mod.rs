use log::{info, warn};
use tokio::{
    sync::mpsc::{self, Sender},
    task::JoinHandle,
};

use self::{component::Component, feeder::PipelineFeeder};

pub mod component;
pub mod feeder;

#[cfg(test)]
mod tests;

/// Capacity of the channels linking components. One slot is enough for a source that
/// cannot be slowed down other than by not reading from it.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1;

pub struct Pipeline<F> {
    components: Vec<Component<F>>,
    feeding_sender: Option<Sender<F>>,

    tag: String,

    channel_capacity: usize,

    bound: bool,

    to_be_feedable: bool,
}

impl<F: Send + 'static> Pipeline<F> {
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
            feeding_sender: None,

            tag: "".to_string(),

            channel_capacity: DEFAULT_CHANNEL_CAPACITY,

            bound: false,

            to_be_feedable: false,
        }
    }

    pub fn singleton(component: Component<F>) -> Self {
        Self::new().link(component)
    }

    pub fn link(mut self, component: Component<F>) -> Self {
        self.components.push(component);
        self
    }

    /// Returns `None` if the pipeline has not been marked as feedable or has no components.
    pub fn get_feeder(&mut self) -> Option<PipelineFeeder<F>> {
        if self.to_be_feedable {
            self.make_feedable();
        }

        let sender = self.feeding_sender.as_ref()?.clone();
        Some(PipelineFeeder::new(sender))
    }

    pub fn run(mut self) -> Vec<JoinHandle<()>> {
        info!("[{}] Launching components...", self.tag);

        if !self.bound {
            self.bind();
        }

        if self.to_be_feedable {
            self.make_feedable();
        }

        self.components
            .into_iter()
            .map(Component::launch)
            .collect()
    }

    fn bind(&mut self) {
        info!("[{}] Binding channels...", self.tag);

        for i in 1..self.components.len() {
            let (sender, receiver) = mpsc::channel::<F>(self.channel_capacity);

            self.components[i - 1].set_sender(sender);
            self.components[i].set_receiver(receiver);
        }

        self.bound = true;
    }

    fn make_feedable(&mut self) {
        let capacity = self.channel_capacity;

        match self.components.first_mut() {
            Some(head) => {
                let (sender, receiver) = mpsc::channel::<F>(capacity);
                self.feeding_sender = Some(sender);
                head.set_receiver(receiver);
            }
            None => warn!("[{}] Cannot feed a pipeline without components", self.tag),
        }

        self.to_be_feedable = false;
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.tag = tag.to_string();
        self
    }

    pub fn feedable(mut self) -> Self {
        self.to_be_feedable = true;
        self
    }

    /// Zero is rounded up to one slot.
    pub fn channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity.max(1);
        self
    }
}

impl<F: Send + 'static> Default for Pipeline<F> {
    fn default() -> Self {
        Self::new()
    }
}
