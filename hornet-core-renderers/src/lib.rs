//! Presentation of decoded frames and their reception stats.

pub mod console;
pub mod presenter;
pub mod shared;
pub mod signal;

#[cfg(test)]
mod tests;

pub use console::ConsolePresenter;
pub use presenter::{FrameStats, Presenter, PresenterProcessor};
pub use shared::{PresentedFrame, SharedFramePresenter};
pub use signal::{MockSignalStrength, SignalStrengthProbe, SignalStrengthSource};
