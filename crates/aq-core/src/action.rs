//! Player intents
//!
//! The entire inbound contract of the engine: one [`Command`] per turn.
//! Raw input normalization (keys, aliases, rejection of anything else)
//! belongs to the front end; the engine never sees an unparsed string.

use strum::{Display, EnumIter};

/// Movement direction - the player moves in cardinals only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    /// Get the delta (dx, dy) for this direction
    pub const fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
        }
    }
}

/// One turn's worth of player intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_deltas_are_cardinal_unit_vectors() {
        for dir in Direction::iter() {
            let (dx, dy) = dir.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }
}
