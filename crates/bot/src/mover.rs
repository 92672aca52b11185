//! Random move generation.
//!
//! Coordinates are drawn independently and uniformly from the configured
//! range. Nothing checks the move against the board: `from` and `to` may be
//! the same square and most moves will be illegal.

use megachess_core::{CoordinateRange, Coordinates, MoveMessage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Owns the one RNG used for every move of the process.
#[derive(Debug)]
pub struct RandomMover {
    rng: StdRng,
    range: CoordinateRange,
}

impl RandomMover {
    /// Seeded once from OS entropy.
    pub fn new(range: CoordinateRange) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            range,
        }
    }

    /// Deterministic sequence, for tests and replays.
    pub fn with_seed(range: CoordinateRange, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            range,
        }
    }

    pub fn range(&self) -> CoordinateRange {
        self.range
    }

    pub fn next_coordinates(&mut self) -> Coordinates {
        Coordinates {
            from_col: self.position(),
            to_col: self.position(),
            from_row: self.position(),
            to_row: self.position(),
        }
    }

    pub fn next_move(&mut self, board_id: &str, turn_token: &str) -> MoveMessage {
        let coords = self.next_coordinates();
        MoveMessage::new(board_id, turn_token, coords)
    }

    fn position(&mut self) -> u8 {
        self.rng.gen_range(self.range.min()..self.range.max())
    }
}
