//! Bot configuration from environment variables

use std::env;
use std::time::Duration;

use megachess_core::CoordinateRange;
use megachess_core::coords::{MAX_OFFSET, MIN_OFFSET};

use crate::error::BotError;

pub const DEFAULT_URL: &str = "wss://mega-chess.herokuapp.com/service";
pub const DEFAULT_AUTH_TOKEN_VAR: &str = "MEGACHESS_AUTH_TOKEN";

#[derive(Clone, Debug)]
pub struct BotConfig {
    /// WebSocket endpoint of the MegaChess service
    pub url: String,

    /// Name of the env variable holding the auth token (read on every connect)
    pub auth_token_var: String,

    /// Range move coordinates are drawn from
    pub coords: CoordinateRange,

    /// Connect attempts made after the live connection fails
    pub reconnect_attempts: u32,

    /// Pause before each reconnect attempt
    pub reconnect_delay: Duration,

    /// Largest outbound frame in bytes. A bigger write fails the send.
    /// `None` leaves the socket unbounded.
    pub write_buffer_limit: Option<usize>,
}

impl BotConfig {
    /// Defaults for everything except the endpoint.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            auth_token_var: DEFAULT_AUTH_TOKEN_VAR.to_string(),
            coords: CoordinateRange::default(),
            reconnect_attempts: 1,
            reconnect_delay: Duration::ZERO,
            write_buffer_limit: None,
        }
    }

    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, BotError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup. Unparseable numbers fall back
    /// to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BotError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("MEGACHESS_URL").unwrap_or_else(|| DEFAULT_URL.to_string());
        if url.trim().is_empty() {
            return Err(BotError::Config("MEGACHESS_URL is empty".into()));
        }

        let auth_token_var = lookup("MEGACHESS_AUTH_TOKEN_VAR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_AUTH_TOKEN_VAR.to_string());

        let min = lookup("MEGACHESS_MIN_COORD")
            .and_then(|v| v.parse().ok())
            .unwrap_or(MIN_OFFSET);

        let max = lookup("MEGACHESS_MAX_COORD")
            .and_then(|v| v.parse().ok())
            .unwrap_or(MAX_OFFSET);

        let coords = CoordinateRange::new(min, max)
            .map_err(|e| BotError::Config(e.to_string()))?;

        let reconnect_attempts = lookup("MEGACHESS_RECONNECT_ATTEMPTS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(1);

        let reconnect_delay = lookup("MEGACHESS_RECONNECT_DELAY_MS")
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::ZERO);

        let write_buffer_limit = lookup("MEGACHESS_WRITE_BUFFER_LIMIT")
            .and_then(|v| v.parse().ok())
            .filter(|limit: &usize| *limit > 0);

        Ok(Self {
            url,
            auth_token_var,
            coords,
            reconnect_attempts,
            reconnect_delay,
            write_buffer_limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = BotConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.url, DEFAULT_URL);
        assert_eq!(config.auth_token_var, "MEGACHESS_AUTH_TOKEN");
        assert_eq!(config.coords, CoordinateRange::default());
        assert_eq!(config.reconnect_attempts, 1);
        assert_eq!(config.reconnect_delay, Duration::ZERO);
        assert_eq!(config.write_buffer_limit, None);
    }

    #[test]
    fn test_overrides() {
        let config = BotConfig::from_lookup(lookup_from(&[
            ("MEGACHESS_URL", "ws://127.0.0.1:9000/service"),
            ("MEGACHESS_AUTH_TOKEN_VAR", "MY_TOKEN"),
            ("MEGACHESS_MIN_COORD", "0"),
            ("MEGACHESS_MAX_COORD", "16"),
            ("MEGACHESS_RECONNECT_ATTEMPTS", "3"),
            ("MEGACHESS_RECONNECT_DELAY_MS", "250"),
            ("MEGACHESS_WRITE_BUFFER_LIMIT", "4096"),
        ]))
        .unwrap();
        assert_eq!(config.url, "ws://127.0.0.1:9000/service");
        assert_eq!(config.auth_token_var, "MY_TOKEN");
        assert_eq!(config.coords.min(), 0);
        assert_eq!(config.coords.max(), 16);
        assert_eq!(config.reconnect_attempts, 3);
        assert_eq!(config.reconnect_delay, Duration::from_millis(250));
        assert_eq!(config.write_buffer_limit, Some(4096));
    }

    #[test]
    fn test_bad_numbers_fall_back() {
        let config = BotConfig::from_lookup(lookup_from(&[
            ("MEGACHESS_RECONNECT_ATTEMPTS", "lots"),
            ("MEGACHESS_MAX_COORD", "-4"),
            ("MEGACHESS_WRITE_BUFFER_LIMIT", "0"),
        ]))
        .unwrap();
        assert_eq!(config.reconnect_attempts, 1);
        assert_eq!(config.coords.max(), 9);
        assert_eq!(config.write_buffer_limit, None);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = BotConfig::from_lookup(lookup_from(&[
            ("MEGACHESS_MIN_COORD", "8"),
            ("MEGACHESS_MAX_COORD", "2"),
        ]))
        .unwrap_err();
        assert!(matches!(err, BotError::Config(_)));
    }

    #[test]
    fn test_empty_url_rejected() {
        let err = BotConfig::from_lookup(lookup_from(&[("MEGACHESS_URL", " ")])).unwrap_err();
        assert!(matches!(err, BotError::Config(_)));
    }
}
