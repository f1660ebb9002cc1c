use std::io;

use thiserror::Error;

/// Failures while establishing the connection to the frame server. All of them are fatal at startup.
#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Unable to connect to {address}: {source}")]
    Connect {
        address: String,
        #[source]
        source: io::Error,
    },

    #[error("Connection to {address} timed out")]
    Timeout { address: String },
}

/// Failures of the framing layer. Any of them leaves the stream desynchronized,
/// so the connection must be torn down.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramingError {
    #[error("Incomplete frame header ({0} of 4 bytes received)")]
    HeaderIncomplete(usize),

    #[error("Invalid frame length {0}")]
    InvalidLength(u32),

    #[error("Truncated frame payload ({0} of {1} bytes received)")]
    PayloadTruncated(usize, usize),

    #[error("Receiver already failed, the connection must be re-established")]
    ReceiverFailed,
}

/// Per-frame, non-fatal reasons for not rendering a frame.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    #[error("Missing encoded frame")]
    NoEncodedFrame,

    #[error("Payload is not a valid image")]
    DecodeError,
}
