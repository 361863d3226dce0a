//! Melee resolution
//!
//! Two entry points, one per initiator: the player swinging at a monster
//! it walked into, and a monster striking an adjacent player.

use crate::consts::PLAYER_ATTACK_DAMAGE;
use crate::entity::{Monster, Player};
use crate::rng::GameRng;

/// Outcome of one player swing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeleeResult {
    /// Damage dealt
    pub damage: i32,
    /// Whether the blow defeated the target
    pub defeated: bool,
}

/// Resolve the player attacking a monster.
///
/// Damage is drawn uniformly per swing. The player never moves onto the
/// target's cell; attacking is always in place.
pub fn player_attacks_monster(monster: &mut Monster, rng: &mut GameRng) -> MeleeResult {
    let damage = rng.range(PLAYER_ATTACK_DAMAGE);
    monster.take_damage(damage);
    MeleeResult {
        damage,
        defeated: !monster.is_alive(),
    }
}

/// Resolve one monster's strike at the player.
///
/// Hits only when both are alive and the monster stands in the player's
/// 8-neighborhood (never on the same cell). Returns the damage dealt,
/// or None if the monster was out of range.
pub fn monster_attacks_player(monster: &Monster, player: &mut Player) -> Option<i32> {
    if !monster.is_alive() || !player.is_alive() {
        return None;
    }
    if !monster.pos.is_adjacent(&player.pos) {
        return None;
    }
    player.take_damage(monster.damage());
    Some(monster.damage())
}
