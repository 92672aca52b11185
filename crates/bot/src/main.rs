//! MegaChess bot
//!
//! Connects, accepts every challenge and plays random moves until the
//! connection is lost for good or the process is interrupted.

use megachess_bot::{BotConfig, ConnectionManager, Dispatcher, RandomMover};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file for local dev
    let _ = dotenvy::dotenv();

    megachess_bot::init_tracing();

    let config = BotConfig::load()?;
    info!(
        url = %config.url,
        reconnect_attempts = config.reconnect_attempts,
        "Bot config loaded"
    );

    let manager = ConnectionManager::new(config.clone());
    let conn = manager.connect().await?;

    let mut dispatcher = Dispatcher::new(manager, RandomMover::new(config.coords));

    tokio::select! {
        result = dispatcher.run(conn) => result?,
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl-C, shutting down");
        }
    }

    Ok(())
}
