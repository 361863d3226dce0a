//! Core game constants
//!
//! Board geometry, entity counts, and the numeric combat/score rules.

use core::ops::RangeInclusive;

/// Board dimensions (outer border included)
pub const BOARD_WIDTH: i32 = 20;
pub const BOARD_HEIGHT: i32 = 15;

/// Entity counts at world generation
pub const NUM_MONSTERS: usize = 3;
pub const NUM_TREASURES: usize = 5;

/// Player vitals
pub const PLAYER_MAX_HP: i32 = 100;

/// Monster attribute ranges, drawn once at spawn
pub const MONSTER_HP: RangeInclusive<i32> = 20..=40;
pub const MONSTER_DAMAGE: RangeInclusive<i32> = 10..=25;

/// Treasure value range, drawn once at spawn
pub const TREASURE_VALUE: RangeInclusive<i32> = 10..=50;

/// Damage dealt by one player melee swing
pub const PLAYER_ATTACK_DAMAGE: RangeInclusive<i32> = 15..=30;

/// Score awarded for defeating a monster
pub const MONSTER_KILL_SCORE: i32 = 25;

/// Score bonus for winning, and the extra for winning at full health
pub const VICTORY_BONUS: i32 = 100;
pub const FLAWLESS_BONUS: i32 = 50;

/// Placement attempts before the spawn sampler falls back to the center
pub const SPAWN_ATTEMPTS: u32 = 100;

/// Map symbols
pub const S_PLAYER: char = '@';
pub const S_MONSTER: char = 'M';
pub const S_TREASURE: char = '$';
pub const S_WALL: char = '#';
pub const S_FLOOR: char = '.';
