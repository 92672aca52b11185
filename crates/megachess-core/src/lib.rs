//! MegaChess wire protocol: action tags, message envelopes and move payloads.

pub mod action;
pub mod coords;
pub mod error;
pub mod message;

pub use action::Action;
pub use coords::{CoordinateRange, Coordinates};
pub use error::ProtocolError;
pub use message::{Envelope, MessageData, MoveData, MoveMessage};
