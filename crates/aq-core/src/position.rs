//! Position on the board
//!
//! Leaf coordinate type shared by every entity. Entities own their
//! position and mutate it in place when they move.

use serde::{Deserialize, Serialize};

/// A 2D integer coordinate, component-wise equality
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position one step away in the given delta
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Chebyshev (8-neighborhood) distance to another position
    pub const fn chebyshev_distance(&self, other: &Position) -> i32 {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        if dx > dy { dx } else { dy }
    }

    /// Check if adjacent (including diagonals), excluding the same cell
    pub const fn is_adjacent(&self, other: &Position) -> bool {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        dx <= 1 && dy <= 1 && (dx > 0 || dy > 0)
    }
}
