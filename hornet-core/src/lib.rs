//! hornet-core holds the pieces shared by every stage of the viewer: the frame DTO that travels
//! through the processing pipeline, the session counters, the error taxonomy and the pipeline itself.

pub mod error;
pub mod pipeline;
pub mod processors;
pub mod session;
pub mod traits;
pub mod types;
