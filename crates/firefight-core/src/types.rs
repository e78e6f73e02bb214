//! Fundamental grid and turn-tracking types.

use serde::{Deserialize, Serialize};

/// Integer tile coordinate on the battle grid.
/// x grows to the right (column), y grows downward (row); (0, 0) is the
/// top-left tile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

/// Mission turn tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnClock {
    /// Current turn number. The opening player turn is turn 1.
    pub turn: u32,
}

impl GridPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another tile, the range metric used everywhere.
    /// Widened to i64 and saturated so far-out command coordinates cannot
    /// overflow the subtraction.
    pub fn manhattan_to(&self, other: &GridPos) -> i32 {
        let dx = (i64::from(other.x) - i64::from(self.x)).abs();
        let dy = (i64::from(other.y) - i64::from(self.y)).abs();
        (dx + dy).min(i64::from(i32::MAX)) as i32
    }

    /// Whether `other` is exactly one orthogonal step away.
    pub fn is_adjacent(&self, other: &GridPos) -> bool {
        self.manhattan_to(other) == 1
    }

    /// Tile offset by (dx, dy).
    pub fn offset(&self, dx: i32, dy: i32) -> GridPos {
        GridPos::new(self.x + dx, self.y + dy)
    }
}

impl Default for TurnClock {
    fn default() -> Self {
        Self { turn: 1 }
    }
}

impl TurnClock {
    /// Advance to the next player turn.
    pub fn advance(&mut self) {
        self.turn += 1;
    }
}
