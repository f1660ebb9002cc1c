use std::time::Duration;

use hornet_core::error::ConnectionError;
use log::info;
use tokio::net::TcpStream;

use crate::{header::DEFAULT_MAX_FRAME_SIZE, receiver::FrameReceiver};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiverConfiguration {
    pub server_host: String,
    pub server_port: u16,
    pub max_frame_size: u32,

    pub read_timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

impl Default for ReceiverConfiguration {
    fn default() -> Self {
        Self {
            server_host: "127.0.0.1".to_string(),
            server_port: 8080,
            max_frame_size: DEFAULT_MAX_FRAME_SIZE,

            read_timeout: None,
            connect_timeout: Some(Duration::from_secs(5)),
        }
    }
}

impl ReceiverConfiguration {
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn validate(&self) -> Result<(), ConnectionError> {
        if self.server_host.trim().is_empty() {
            return Err(ConnectionError::InvalidConfiguration(
                "server_host must not be empty".to_string(),
            ));
        }

        if self.max_frame_size == 0 {
            return Err(ConnectionError::InvalidConfiguration(
                "max_frame_size must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

/// Resolves the configured server and connects to it.
pub async fn connect(
    config: &ReceiverConfiguration,
) -> Result<FrameReceiver<TcpStream>, ConnectionError> {
    config.validate()?;

    let address = config.server_address();
    info!("Connecting to {}...", address);

    let connection = TcpStream::connect((config.server_host.as_str(), config.server_port));
    let result = match config.connect_timeout {
        Some(connect_timeout) => tokio::time::timeout(connect_timeout, connection)
            .await
            .map_err(|_| ConnectionError::Timeout {
                address: address.clone(),
            })?,
        None => connection.await,
    };

    let stream = result.map_err(|source| ConnectionError::Connect {
        address: address.clone(),
        source,
    })?;

    info!("Connected to {}", address);

    Ok(FrameReceiver::new(stream, config.max_frame_size).with_read_timeout(config.read_timeout))
}
