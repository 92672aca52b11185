//! Action tags carried in the `action` field of every frame.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const CONNECT: &str = "connect";
pub const ASK_CHALLENGE: &str = "ask_challenge";
pub const ACCEPT_CHALLENGE: &str = "accept_challenge";
pub const CHALLENGE: &str = "challenge";
pub const YOUR_TURN: &str = "your_turn";
pub const MOVE: &str = "move";

/// Known actions plus a catch-all for tags this client does not act on.
///
/// A missing `action` field decodes to `Unknown("")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Action {
    Connect,
    AskChallenge,
    AcceptChallenge,
    Challenge,
    YourTurn,
    Move,
    Unknown(String),
}

impl Action {
    pub fn as_str(&self) -> &str {
        match self {
            Action::Connect => CONNECT,
            Action::AskChallenge => ASK_CHALLENGE,
            Action::AcceptChallenge => ACCEPT_CHALLENGE,
            Action::Challenge => CHALLENGE,
            Action::YourTurn => YOUR_TURN,
            Action::Move => MOVE,
            Action::Unknown(tag) => tag,
        }
    }

    /// `false` only for tags outside the protocol, including a missing tag.
    pub fn is_known(&self) -> bool {
        !matches!(self, Action::Unknown(_))
    }
}

impl Default for Action {
    fn default() -> Self {
        Action::Unknown(String::new())
    }
}

impl From<&str> for Action {
    fn from(tag: &str) -> Self {
        match tag {
            CONNECT => Action::Connect,
            ASK_CHALLENGE => Action::AskChallenge,
            ACCEPT_CHALLENGE => Action::AcceptChallenge,
            CHALLENGE => Action::Challenge,
            YOUR_TURN => Action::YourTurn,
            MOVE => Action::Move,
            other => Action::Unknown(other.to_string()),
        }
    }
}

impl From<String> for Action {
    fn from(tag: String) -> Self {
        match Action::from(tag.as_str()) {
            Action::Unknown(_) => Action::Unknown(tag),
            known => known,
        }
    }
}

impl From<Action> for String {
    fn from(action: Action) -> Self {
        match action {
            Action::Unknown(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
