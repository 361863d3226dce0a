//! Monster instances and their chase behavior

use serde::{Deserialize, Serialize};

use super::Vitality;
use crate::board::Board;
use crate::consts::{MONSTER_DAMAGE, MONSTER_HP};
use crate::position::Position;
use crate::rng::GameRng;

/// Unique identifier for monster instances, stable across pruning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonsterId(pub u32);

impl MonsterId {
    pub fn next(self) -> Self {
        MonsterId(self.0 + 1)
    }
}

/// A wandering monster. Spawned at game start, pruned once defeated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Monster {
    id: MonsterId,
    pub pos: Position,
    hp: i32,
    damage: i32,
    vitality: Vitality,
}

impl Monster {
    /// Spawn with randomly drawn vitals
    pub fn spawn(id: MonsterId, pos: Position, rng: &mut GameRng) -> Self {
        let hp = rng.range(MONSTER_HP);
        let damage = rng.range(MONSTER_DAMAGE);
        Self::with_stats(id, pos, hp, damage)
    }

    /// Spawn with fixed vitals
    pub fn with_stats(id: MonsterId, pos: Position, hp: i32, damage: i32) -> Self {
        Self {
            id,
            pos,
            hp,
            damage,
            vitality: Vitality::Alive,
        }
    }

    pub fn id(&self) -> MonsterId {
        self.id
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn damage(&self) -> i32 {
        self.damage
    }

    pub fn vitality(&self) -> Vitality {
        self.vitality
    }

    pub fn is_alive(&self) -> bool {
        self.vitality.is_alive()
    }

    /// Apply damage. HP clamps at 0; reaching 0 defeats the monster,
    /// a one-way transition.
    pub fn take_damage(&mut self, damage: i32) {
        self.hp -= damage;
        if self.hp <= 0 {
            self.hp = 0;
            self.vitality = Vitality::Defeated;
        }
    }

    /// The single greedy step toward a target: each axis moves by its
    /// sign independently, so diagonal steps are possible.
    pub fn chase_step(&self, target: Position) -> (i32, i32) {
        ((target.x - self.pos.x).signum(), (target.y - self.pos.y).signum())
    }

    /// Take one chase step toward the target.
    ///
    /// Only board bounds gate the step. Walls and other entities do not:
    /// a monster may stand on a wall cell or share a cell with another
    /// monster.
    pub fn step_towards(&mut self, target: Position, board: &Board) {
        if !self.is_alive() {
            return;
        }
        let (dx, dy) = self.chase_step(target);
        let next = self.pos.offset(dx, dy);
        if board.in_bounds(next.x, next.y) {
            self.pos = next;
        }
    }
}
