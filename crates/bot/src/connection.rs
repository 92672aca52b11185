//! WebSocket connection to the MegaChess service and the reconnect policy

use std::env;
use std::sync::Once;

use futures_util::{SinkExt, StreamExt};
use megachess_core::{Envelope, MoveMessage};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::protocol::WebSocketConfig;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async_with_config, MaybeTlsStream, WebSocketStream};
use tracing::{debug, error, info, warn};

use crate::config::BotConfig;
use crate::error::BotError;

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

static CRYPTO_PROVIDER: Once = Once::new();

/// rustls needs a process-wide crypto provider before the first `wss://`
/// handshake.
fn install_crypto_provider() {
    CRYPTO_PROVIDER.call_once(|| {
        // Err means another provider is already installed, which is fine.
        let _ = rustls::crypto::ring::default_provider().install_default();
    });
}

/// The single live session. Replaced wholesale on reconnect.
pub struct Connection {
    stream: WsStream,
}

impl Connection {
    /// Wait for the next text frame.
    ///
    /// Control frames are skipped. A close frame or end of stream is reported
    /// as `ConnectionClosed` so the caller can reconnect.
    pub async fn next_frame(&mut self) -> Result<String, BotError> {
        loop {
            match self.stream.next().await {
                Some(Ok(Message::Text(text))) => return Ok(text),
                Some(Ok(Message::Binary(bytes))) => match String::from_utf8(bytes) {
                    Ok(text) => return Ok(text),
                    Err(_) => {
                        warn!("Dropping non UTF-8 binary frame");
                        continue;
                    }
                },
                Some(Ok(Message::Close(frame))) => {
                    debug!(?frame, "Close frame received");
                    return Err(BotError::ConnectionClosed);
                }
                Some(Ok(_)) => continue,
                Some(Err(e)) => return Err(BotError::TransportRead(e)),
                None => return Err(BotError::ConnectionClosed),
            }
        }
    }

    pub async fn send(&mut self, msg: &Envelope) -> Result<(), BotError> {
        let json = msg.encode().map_err(BotError::Encode)?;
        self.send_text(json).await
    }

    pub async fn send_move(&mut self, msg: &MoveMessage) -> Result<(), BotError> {
        let json = msg.encode().map_err(BotError::Encode)?;
        debug!(payload = %json, "Sending move");
        self.send_text(json).await
    }

    async fn send_text(&mut self, text: String) -> Result<(), BotError> {
        self.stream
            .send(Message::Text(text))
            .await
            .map_err(BotError::Send)
    }
}

/// Opens connections and applies the reconnect policy.
#[derive(Clone, Debug)]
pub struct ConnectionManager {
    config: BotConfig,
}

impl ConnectionManager {
    pub fn new(config: BotConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// Open the socket, then authenticate with the token from the environment.
    ///
    /// The socket is opened before the token is checked, so a missing token
    /// still costs one connection to the server.
    pub async fn connect(&self) -> Result<Connection, BotError> {
        install_crypto_provider();

        let (stream, _) =
            connect_async_with_config(self.config.url.as_str(), self.ws_config(), false)
                .await
                .map_err(BotError::TransportOpen)?;
        let mut conn = Connection { stream };

        let auth_token = env::var(&self.config.auth_token_var).unwrap_or_default();
        if auth_token.is_empty() {
            return Err(BotError::MissingCredential(
                self.config.auth_token_var.clone(),
            ));
        }

        conn.send(&Envelope::connect(auth_token)).await?;
        info!(url = %self.config.url, "Connected to MegaChess");

        Ok(conn)
    }

    fn ws_config(&self) -> Option<WebSocketConfig> {
        let limit = self.config.write_buffer_limit?;
        let mut ws_config = WebSocketConfig::default();
        // Write frames straight through so the limit applies per frame.
        ws_config.write_buffer_size = 0;
        ws_config.max_write_buffer_size = limit;
        Some(ws_config)
    }

    /// Replace a failed connection. Makes at most `reconnect_attempts`
    /// connect attempts with a fixed delay before each one.
    ///
    /// On failure the last attempt's error is the source, or `cause` when no
    /// attempt was made.
    pub async fn reconnect(&self, cause: BotError) -> Result<Connection, BotError> {
        error!(error = %cause, "Connection failed");

        let attempts = self.config.reconnect_attempts;
        let mut last_error = cause;

        for attempt in 1..=attempts {
            if !self.config.reconnect_delay.is_zero() {
                tokio::time::sleep(self.config.reconnect_delay).await;
            }

            info!(attempt, max_attempts = attempts, "Attempting to re-connect...");
            match self.connect().await {
                Ok(conn) => return Ok(conn),
                Err(e) => {
                    warn!(attempt, error = %e, "Re-connect attempt failed");
                    last_error = e;
                }
            }
        }

        error!(attempts, "Failed to re-connect to websocket");
        Err(BotError::ReconnectFailed {
            attempts,
            source: Box::new(last_error),
        })
    }
}
