//! JSON frames exchanged with the MegaChess service.
//!
//! Every frame is `{"action": <tag>, "data": {...}}`. Inbound frames carry an
//! arbitrary subset of the data fields, so every field defaults to empty
//! (whether missing or `null`) and empty fields are left out when encoding.

use serde::{Deserialize, Deserializer, Serialize};

use crate::action::Action;
use crate::coords::Coordinates;
use crate::error::ProtocolError;

/// Payload shared by every non-move frame.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageData {
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub auth_token: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub turn_token: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub board_id: String,
}

/// A tagged frame: inbound notifications and the `connect`,
/// `accept_challenge` and `challenge` requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Envelope {
    #[serde(skip_serializing_if = "is_untagged", deserialize_with = "null_as_default")]
    pub action: Action,
    #[serde(deserialize_with = "null_as_default")]
    pub data: MessageData,
}

fn is_untagged(action: &Action) -> bool {
    action.as_str().is_empty()
}

/// Read `null` as the type's default instead of failing.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Envelope {
    pub fn connect(auth_token: impl Into<String>) -> Self {
        Self {
            action: Action::Connect,
            data: MessageData {
                auth_token: auth_token.into(),
                ..Default::default()
            },
        }
    }

    pub fn accept_challenge(board_id: impl Into<String>) -> Self {
        Self {
            action: Action::AcceptChallenge,
            data: MessageData {
                board_id: board_id.into(),
                ..Default::default()
            },
        }
    }

    pub fn challenge(username: impl Into<String>) -> Self {
        Self {
            action: Action::Challenge,
            data: MessageData {
                username: username.into(),
                ..Default::default()
            },
        }
    }

    pub fn decode(frame: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(frame)?)
    }

    pub fn encode(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Payload of a `move` frame. Coordinates travel as decimal strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveData {
    #[serde(deserialize_with = "null_as_default")]
    pub turn_token: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub board_id: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub from_col: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub to_col: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub from_row: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub to_row: String,
}

impl MoveData {
    /// Parse the four coordinate strings back into numbers.
    /// Returns `None` if any of them is missing or not a number.
    pub fn coordinates(&self) -> Option<Coordinates> {
        Some(Coordinates {
            from_col: self.from_col.parse().ok()?,
            to_col: self.to_col.parse().ok()?,
            from_row: self.from_row.parse().ok()?,
            to_row: self.to_row.parse().ok()?,
        })
    }
}

/// Outbound `move` frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveMessage {
    pub action: Action,
    pub data: MoveData,
}

impl MoveMessage {
    pub fn new(
        board_id: impl Into<String>,
        turn_token: impl Into<String>,
        coords: Coordinates,
    ) -> Self {
        Self {
            action: Action::Move,
            data: MoveData {
                turn_token: turn_token.into(),
                board_id: board_id.into(),
                from_col: coords.from_col.to_string(),
                to_col: coords.to_col.to_string(),
                from_row: coords.from_row.to_string(),
                to_row: coords.to_row.to_string(),
            },
        }
    }

    pub fn decode(frame: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(frame)?)
    }

    pub fn encode(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string(self)?)
    }
}
