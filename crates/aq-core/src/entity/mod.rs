//! Game entities
//!
//! The hero, the monsters that chase it, and the treasure it is after.
//! Entity lifecycles are tagged states rather than booleans, so the
//! one-way transitions (defeat, collection) cannot be reversed by
//! accident.

mod monster;
mod player;
mod treasure;

pub use monster::{Monster, MonsterId};
pub use player::Player;
pub use treasure::{Treasure, TreasureId, TreasureState};

use serde::{Deserialize, Serialize};
use strum::Display;

/// Lifecycle of a combatant. Defeated is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
pub enum Vitality {
    #[default]
    Alive,
    Defeated,
}

impl Vitality {
    pub const fn is_alive(&self) -> bool {
        matches!(self, Vitality::Alive)
    }
}
