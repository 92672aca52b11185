//! Board coordinates for outbound moves.

use crate::error::ProtocolError;

/// Lowest coordinate the service accepts.
pub const MIN_OFFSET: u8 = 1;
/// One past the highest coordinate the service accepts.
pub const MAX_OFFSET: u8 = 9;

/// Half-open range `[min, max)` that move coordinates are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateRange {
    min: u8,
    max: u8,
}

impl CoordinateRange {
    pub fn new(min: u8, max: u8) -> Result<Self, ProtocolError> {
        if min >= max {
            return Err(ProtocolError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u8 {
        self.min
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    pub fn contains(&self, value: u8) -> bool {
        (self.min..self.max).contains(&value)
    }
}

impl Default for CoordinateRange {
    fn default() -> Self {
        Self {
            min: MIN_OFFSET,
            max: MAX_OFFSET,
        }
    }
}

/// Source and destination squares of a move, as column/row numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinates {
    pub from_col: u8,
    pub to_col: u8,
    pub from_row: u8,
    pub to_row: u8,
}

impl Coordinates {
    /// All four values, in wire field order.
    pub fn values(&self) -> [u8; 4] {
        [self.from_col, self.to_col, self.from_row, self.to_row]
    }
}
