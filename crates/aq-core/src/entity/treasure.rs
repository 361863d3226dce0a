//! Treasure items

use serde::{Deserialize, Serialize};
use strum::Display;

use super::Player;
use crate::consts::TREASURE_VALUE;
use crate::position::Position;
use crate::rng::GameRng;

/// Unique identifier for treasure instances, stable across pruning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TreasureId(pub u32);

impl TreasureId {
    pub fn next(self) -> Self {
        TreasureId(self.0 + 1)
    }
}

/// Lifecycle of a treasure. Collected is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
pub enum TreasureState {
    #[default]
    Present,
    Collected,
}

/// A pile of treasure. Fixed value drawn at spawn; collected at most once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Treasure {
    id: TreasureId,
    pub pos: Position,
    value: i32,
    state: TreasureState,
}

impl Treasure {
    /// Spawn with a randomly drawn value
    pub fn spawn(id: TreasureId, pos: Position, rng: &mut GameRng) -> Self {
        let value = rng.range(TREASURE_VALUE);
        Self::with_value(id, pos, value)
    }

    /// Spawn with an explicit value
    pub fn with_value(id: TreasureId, pos: Position, value: i32) -> Self {
        Self {
            id,
            pos,
            value,
            state: TreasureState::Present,
        }
    }

    pub fn id(&self) -> TreasureId {
        self.id
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn state(&self) -> TreasureState {
        self.state
    }

    pub fn is_present(&self) -> bool {
        matches!(self.state, TreasureState::Present)
    }

    /// Collect this treasure if the player stands on it.
    ///
    /// On success the treasure becomes Collected and the player's score
    /// grows by the treasure's value. Returns whether collection happened;
    /// always false once collected.
    pub fn collect_by(&mut self, player: &mut Player) -> bool {
        if self.is_present() && self.pos == player.pos {
            self.state = TreasureState::Collected;
            player.add_score(self.value);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_value_in_range() {
        let mut rng = GameRng::new(11);
        for _ in 0..100 {
            let t = Treasure::spawn(TreasureId(0), Position::new(2, 2), &mut rng);
            assert!(TREASURE_VALUE.contains(&t.value()));
            assert!(t.is_present());
        }
    }

    #[test]
    fn test_collect_requires_same_cell() {
        let mut t = Treasure::with_value(TreasureId(0), Position::new(2, 2), 30);
        let mut player = Player::new(Position::new(2, 3));
        assert!(!t.collect_by(&mut player));
        assert!(t.is_present());
        assert_eq!(player.score(), 0);
    }

    #[test]
    fn test_collect_once_adds_exact_value() {
        let mut t = Treasure::with_value(TreasureId(0), Position::new(2, 2), 30);
        let mut player = Player::new(Position::new(2, 2));

        assert!(t.collect_by(&mut player));
        assert_eq!(t.state(), TreasureState::Collected);
        assert_eq!(player.score(), 30);

        // Second collection is a no-op.
        assert!(!t.collect_by(&mut player));
        assert_eq!(player.score(), 30);
    }
}
