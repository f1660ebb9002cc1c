//! Reception of length-prefixed frames: every frame on the wire is a 4-byte big-endian length
//! followed by exactly that many payload bytes, with no other delimiter.

pub mod config;
pub mod header;
pub mod receiver;
pub mod sender;
pub mod session;


pub use config::{connect, ReceiverConfiguration};
pub use receiver::{FrameReceiver, ReceiverState};
pub use sender::FrameSender;
pub use session::{ReceptionLoop, SessionEnd, SessionReport};
