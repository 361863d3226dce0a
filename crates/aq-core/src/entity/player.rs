//! The player character

use serde::{Deserialize, Serialize};

use super::Vitality;
use crate::consts::PLAYER_MAX_HP;
use crate::position::Position;

/// The hero. Created once per game; never removed, only defeated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Position,
    hp: i32,
    hp_max: i32,
    score: i32,
    vitality: Vitality,
}

impl Player {
    pub fn new(pos: Position) -> Self {
        Self {
            pos,
            hp: PLAYER_MAX_HP,
            hp_max: PLAYER_MAX_HP,
            score: 0,
            vitality: Vitality::Alive,
        }
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn hp_max(&self) -> i32 {
        self.hp_max
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn vitality(&self) -> Vitality {
        self.vitality
    }

    pub fn is_alive(&self) -> bool {
        self.vitality.is_alive()
    }

    /// Apply damage. HP clamps at 0, and hitting 0 is what defeats the
    /// player - the transition fires exactly once.
    pub fn take_damage(&mut self, damage: i32) {
        self.hp -= damage;
        if self.hp <= 0 {
            self.hp = 0;
            self.vitality = Vitality::Defeated;
        }
    }

    /// Restore health, clamped at the maximum
    pub fn heal(&mut self, amount: i32) {
        self.hp += amount;
        if self.hp > self.hp_max {
            self.hp = self.hp_max;
        }
    }

    /// Award points. Score never decreases.
    pub fn add_score(&mut self, points: i32) {
        self.score += points;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_full_health() {
        let player = Player::new(Position::new(3, 3));
        assert_eq!(player.hp(), PLAYER_MAX_HP);
        assert_eq!(player.hp_max(), PLAYER_MAX_HP);
        assert_eq!(player.score(), 0);
        assert!(player.is_alive());
    }

    #[test]
    fn test_damage_clamps_to_zero() {
        let mut player = Player::new(Position::new(3, 3));
        player.take_damage(40);
        assert_eq!(player.hp(), 60);
        assert!(player.is_alive());

        player.take_damage(999);
        assert_eq!(player.hp(), 0);
        assert!(!player.is_alive());
        assert_eq!(player.vitality(), Vitality::Defeated);
    }

    #[test]
    fn test_exact_lethal_damage_defeats() {
        let mut player = Player::new(Position::new(3, 3));
        player.take_damage(PLAYER_MAX_HP);
        assert_eq!(player.hp(), 0);
        assert!(!player.is_alive());
    }

    #[test]
    fn test_heal_clamps_at_max() {
        let mut player = Player::new(Position::new(3, 3));
        player.take_damage(30);
        player.heal(10);
        assert_eq!(player.hp(), 80);
        player.heal(999);
        assert_eq!(player.hp(), PLAYER_MAX_HP);
    }

    #[test]
    fn test_heal_does_not_revive() {
        let mut player = Player::new(Position::new(3, 3));
        player.take_damage(PLAYER_MAX_HP);
        player.heal(50);
        assert!(!player.is_alive());
    }

    #[test]
    fn test_score_accumulates() {
        let mut player = Player::new(Position::new(3, 3));
        player.add_score(25);
        player.add_score(42);
        assert_eq!(player.score(), 67);
    }
}
