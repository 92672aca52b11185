//! Challenge a user by name, then keep playing like the regular bot.
//!
//! Usage: challenge   (the username is read from stdin)

use megachess_bot::challenge::{issue_challenge, prompt_username};
use megachess_bot::{BotConfig, ConnectionManager, Dispatcher, RandomMover};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    megachess_bot::init_tracing();

    let config = BotConfig::load()?;
    let manager = ConnectionManager::new(config.clone());
    let mut conn = manager.connect().await?;

    let username = prompt_username().await?;
    issue_challenge(&mut conn, &username).await?;

    let mut dispatcher = Dispatcher::new(manager, RandomMover::new(config.coords));

    tokio::select! {
        result = dispatcher.run(conn) => result?,
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl-C, shutting down");
        }
    }

    Ok(())
}
