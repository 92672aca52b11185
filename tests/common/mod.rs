//! In-process stand-in for the MegaChess service.

#![allow(dead_code)]

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use megachess_bot::BotConfig;
use serde_json::Value;
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{accept_async, WebSocketStream};

pub type ServerSocket = WebSocketStream<TcpStream>;

/// How long a test waits for any single frame or task.
pub const WAIT: Duration = Duration::from_secs(5);

/// Bind a listener on an ephemeral port and return it with its `ws://` URL.
pub async fn bind() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock server");
    let addr = listener.local_addr().expect("No local address");
    (listener, format!("ws://{addr}/service"))
}

/// Accept one client and complete the WebSocket handshake.
pub async fn accept(listener: &TcpListener) -> ServerSocket {
    let (tcp, _) = tokio::time::timeout(WAIT, listener.accept())
        .await
        .expect("Timed out waiting for client")
        .expect("Failed to accept client");
    accept_async(tcp).await.expect("WebSocket handshake failed")
}

/// Next text frame from the client, parsed as JSON.
pub async fn recv_json(ws: &mut ServerSocket) -> Value {
    loop {
        let msg = tokio::time::timeout(WAIT, ws.next())
            .await
            .expect("Timed out waiting for frame")
            .expect("Client closed the connection")
            .expect("Failed to read frame");
        if let Message::Text(text) = msg {
            return serde_json::from_str(&text).expect("Client sent invalid JSON");
        }
    }
}

/// `true` if the client sends nothing within `wait`.
pub async fn stays_quiet(ws: &mut ServerSocket, wait: Duration) -> bool {
    match tokio::time::timeout(wait, ws.next()).await {
        Err(_) => true,
        Ok(Some(Ok(Message::Text(_)))) => false,
        Ok(_) => true,
    }
}

pub async fn send_json(ws: &mut ServerSocket, value: Value) {
    send_text(ws, value.to_string()).await;
}

pub async fn send_text(ws: &mut ServerSocket, text: impl Into<String>) {
    ws.send(Message::Text(text.into()))
        .await
        .expect("Failed to send frame");
}

/// Config pointing at the mock server, reading the token from `token_var`.
pub fn config(url: &str, token_var: &str) -> BotConfig {
    let mut config = BotConfig::new(url);
    config.auth_token_var = token_var.to_string();
    config
}

/// Set a test-specific token variable. Each test uses its own name so
/// parallel tests never share one.
pub fn set_token(var: &str, value: &str) {
    std::env::set_var(var, value);
}
