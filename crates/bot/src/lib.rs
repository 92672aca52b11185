//! MegaChess random-move bot.
//!
//! Connects to the MegaChess service, accepts every challenge and answers
//! each turn with a random move.

pub use megachess_core;

pub mod challenge;
pub mod config;
pub mod connection;
pub mod dispatcher;
pub mod error;
pub mod mover;

pub use config::BotConfig;
pub use connection::{Connection, ConnectionManager};
pub use dispatcher::{route, Dispatcher, Reply};
pub use error::BotError;
pub use mover::RandomMover;

/// Initialize tracing from `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();
}
