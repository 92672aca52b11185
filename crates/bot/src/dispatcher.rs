//! Receive loop: decode frames, route by action, reply on the same connection

use megachess_core::{Action, Envelope, MoveMessage};
use tracing::{error, info, warn};

use crate::connection::{Connection, ConnectionManager};
use crate::error::BotError;
use crate::mover::RandomMover;

/// What the bot sends back for an inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    AcceptChallenge(Envelope),
    Move(MoveMessage),
    Ignore,
}

/// Decide the reply for a decoded message. Only `ask_challenge` and
/// `your_turn` produce outbound frames.
pub fn route(msg: &Envelope, mover: &mut RandomMover) -> Reply {
    match &msg.action {
        Action::AskChallenge => {
            Reply::AcceptChallenge(Envelope::accept_challenge(&msg.data.board_id))
        }
        Action::YourTurn => {
            Reply::Move(mover.next_move(&msg.data.board_id, &msg.data.turn_token))
        }
        Action::Connect
        | Action::AcceptChallenge
        | Action::Challenge
        | Action::Move
        | Action::Unknown(_) => Reply::Ignore,
    }
}

pub struct Dispatcher {
    manager: ConnectionManager,
    mover: RandomMover,
}

impl Dispatcher {
    pub fn new(manager: ConnectionManager, mover: RandomMover) -> Self {
        Self { manager, mover }
    }

    /// Run until the connection fails and cannot be replaced.
    ///
    /// Read and send failures go through the reconnect policy; undecodable
    /// frames and unencodable replies are logged and dropped.
    pub async fn run(&mut self, mut conn: Connection) -> Result<(), BotError> {
        loop {
            let result = match conn.next_frame().await {
                Ok(frame) => self.handle_frame(&mut conn, &frame).await,
                Err(e) => Err(e),
            };

            match result {
                Ok(()) => {}
                Err(e) if e.is_transport_failure() => {
                    conn = self.manager.reconnect(e).await?;
                }
                Err(e @ BotError::Decode(_)) => {
                    warn!(error = %e, "Dropping frame");
                }
                Err(e) => {
                    error!(error = %e, "Dropping reply");
                }
            }
        }
    }

    pub async fn handle_frame(
        &mut self,
        conn: &mut Connection,
        frame: &str,
    ) -> Result<(), BotError> {
        let msg = Envelope::decode(frame).map_err(BotError::Decode)?;
        info!(action = %msg.action, "Received action");

        match route(&msg, &mut self.mover) {
            Reply::AcceptChallenge(reply) => {
                conn.send(&reply).await?;
                info!(board_id = %msg.data.board_id, "Challenge accepted");
            }
            Reply::Move(reply) => {
                conn.send_move(&reply).await?;
                info!(
                    board_id = %reply.data.board_id,
                    from_col = %reply.data.from_col,
                    from_row = %reply.data.from_row,
                    to_col = %reply.data.to_col,
                    to_row = %reply.data.to_row,
                    "Move submitted"
                );
            }
            Reply::Ignore => {
                if !msg.action.is_known() {
                    warn!(action = %msg.action, "Ignoring action");
                }
                if !msg.data.message.is_empty() {
                    info!(action = %msg.action, message = %msg.data.message, "Server message");
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use megachess_core::CoordinateRange;

    fn mover() -> RandomMover {
        RandomMover::with_seed(CoordinateRange::default(), 3)
    }

    #[test]
    fn test_ask_challenge_accepts_board() {
        let msg = Envelope::decode(
            r#"{"action":"ask_challenge","data":{"username":"rival","board_id":"b-12"}}"#,
        )
        .unwrap();
        assert_eq!(
            route(&msg, &mut mover()),
            Reply::AcceptChallenge(Envelope::accept_challenge("b-12"))
        );
    }

    #[test]
    fn test_your_turn_moves_on_board() {
        let msg = Envelope::decode(
            r#"{"action":"your_turn","data":{"board_id":"b-5","turn_token":"tok"}}"#,
        )
        .unwrap();
        match route(&msg, &mut mover()) {
            Reply::Move(m) => {
                assert_eq!(m.action, Action::Move);
                assert_eq!(m.data.board_id, "b-5");
                assert_eq!(m.data.turn_token, "tok");
                let coords = m.data.coordinates().unwrap();
                assert!(coords.values().iter().all(|v| (1..=8).contains(v)));
            }
            other => panic!("expected a move, got {other:?}"),
        }
    }

    #[test]
    fn test_other_actions_ignored() {
        for frame in [
            r#"{"action":"gameover","data":{"message":"white wins"}}"#,
            r#"{"action":"update_user_list","data":{}}"#,
            r#"{"action":"move","data":{"board_id":"b"}}"#,
            r#"{"data":{"board_id":"b"}}"#,
            "{}",
        ] {
            let msg = Envelope::decode(frame).unwrap();
            assert_eq!(route(&msg, &mut mover()), Reply::Ignore, "frame: {frame}");
        }
    }

    #[test]
    fn test_your_turn_without_data_still_moves() {
        let msg = Envelope::decode(r#"{"action":"your_turn"}"#).unwrap();
        match route(&msg, &mut mover()) {
            Reply::Move(m) => {
                assert_eq!(m.data.board_id, "");
                assert_eq!(m.data.turn_token, "");
            }
            other => panic!("expected a move, got {other:?}"),
        }
    }
}
