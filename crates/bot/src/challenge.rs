//! Manual challenge: ask the operator for a username and challenge them.

use megachess_core::Envelope;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt};
use tracing::info;

use crate::connection::Connection;
use crate::error::BotError;

pub const PROMPT: &str = "Username to challenge: ";

/// Read one line and strip the line ending and surrounding whitespace.
pub async fn read_username<R>(reader: &mut R) -> Result<String, BotError>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    reader.read_line(&mut line).await?;

    let username = line.trim();
    if username.is_empty() {
        return Err(BotError::EmptyUsername);
    }
    Ok(username.to_string())
}

/// Prompt on stdout and read the username from stdin.
pub async fn prompt_username() -> Result<String, BotError> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(PROMPT.as_bytes()).await?;
    stdout.flush().await?;

    let mut stdin = tokio::io::BufReader::new(tokio::io::stdin());
    read_username(&mut stdin).await
}

pub async fn issue_challenge(conn: &mut Connection, username: &str) -> Result<(), BotError> {
    conn.send(&Envelope::challenge(username)).await?;
    info!(username, "Challenge sent");
    Ok(())
}
