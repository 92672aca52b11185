//! Bot error types

use megachess_core::ProtocolError;
use thiserror::Error;
use tokio_tungstenite::tungstenite;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to open connection: {0}")]
    TransportOpen(#[source] tungstenite::Error),

    #[error("{0} env variable not set")]
    MissingCredential(String),

    #[error("Failed to read from connection: {0}")]
    TransportRead(#[source] tungstenite::Error),

    #[error("Connection closed by server")]
    ConnectionClosed,

    #[error("Failed to decode frame: {0}")]
    Decode(#[source] ProtocolError),

    #[error("Failed to encode message: {0}")]
    Encode(#[source] ProtocolError),

    #[error("Failed to send message: {0}")]
    Send(#[source] tungstenite::Error),

    #[error("Failed to reconnect after {attempts} attempt(s): {source}")]
    ReconnectFailed {
        attempts: u32,
        #[source]
        source: Box<BotError>,
    },

    #[error("Username must not be empty")]
    EmptyUsername,

    #[error("Failed to read from stdin: {0}")]
    Stdin(#[from] std::io::Error),

    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

impl BotError {
    /// Errors that mean the connection is gone and must be replaced.
    pub fn is_transport_failure(&self) -> bool {
        matches!(
            self,
            BotError::TransportRead(_) | BotError::ConnectionClosed | BotError::Send(_)
        )
    }
}
