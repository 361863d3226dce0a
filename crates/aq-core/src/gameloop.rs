//! Main game loop
//!
//! `GameState` owns the board, the entity arenas, the RNG, and the
//! message buffer; `GameLoop` drives one full turn per command. A turn
//! runs the fixed pipeline: end-check, player move (or melee), monster
//! chase steps, monster attacks.

use serde::{Deserialize, Serialize};

use crate::action::Command;
use crate::board::Board;
use crate::combat;
use crate::consts::{
    FLAWLESS_BONUS, MONSTER_KILL_SCORE, NUM_MONSTERS, NUM_TREASURES, SPAWN_ATTEMPTS, VICTORY_BONUS,
};
use crate::entity::{Monster, MonsterId, Player, Treasure, TreasureId};
use crate::position::Position;
use crate::rng::GameRng;

/// Session status. Everything but Running is terminal and sticky.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Running,
    Won,
    Lost,
    Abandoned,
}

impl GameStatus {
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Running)
    }
}

/// Result of one game loop tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Keep playing
    Continue,
    /// All treasure collected
    Won,
    /// The player fell
    Lost,
    /// The player quit
    Abandoned,
}

/// Final figures for the game-over screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub status: GameStatus,
    pub score: i32,
    pub hp: i32,
    pub hp_max: i32,
    pub treasures_collected: usize,
    pub treasures_total: usize,
    pub monsters_defeated: usize,
    pub monsters_total: usize,
}

/// Main game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Static terrain
    pub board: Board,

    /// The hero
    pub player: Player,

    /// Monster arena, in spawn order. Spawn order is the iteration order
    /// for the whole game, which keeps combat targeting deterministic.
    pub monsters: Vec<Monster>,

    /// Treasure arena, in spawn order
    pub treasures: Vec<Treasure>,

    /// Random number generator
    pub rng: GameRng,

    /// Session status
    pub status: GameStatus,

    /// Turn counter
    pub turns: u64,

    /// Messages for the current turn
    #[serde(skip)]
    pub messages: Vec<String>,

    /// Permanent message history
    #[serde(skip)]
    pub message_history: Vec<String>,

    next_monster_id: MonsterId,
    next_treasure_id: TreasureId,
    monsters_total: usize,
    treasures_total: usize,
}

/// Sample an interior position that is terrain-valid and unoccupied.
///
/// Up to `SPAWN_ATTEMPTS` uniform draws over the interior; on exhaustion
/// falls back to the exact board center WITHOUT re-checking occupancy.
/// The fallback can therefore stack entities - a known limitation kept
/// as-is.
fn sample_empty_position(
    board: &Board,
    player: Option<&Player>,
    monsters: &[Monster],
    treasures: &[Treasure],
    rng: &mut GameRng,
) -> Position {
    let max_x = board.width() - 2;
    let max_y = board.height() - 2;

    for _ in 0..SPAWN_ATTEMPTS {
        let x = rng.range(1..=max_x);
        let y = rng.range(1..=max_y);
        if !board.is_valid_position(x, y) {
            continue;
        }
        let pos = Position::new(x, y);
        let occupied = player.is_some_and(|p| p.is_alive() && p.pos == pos)
            || monsters.iter().any(|m| m.is_alive() && m.pos == pos)
            || treasures.iter().any(|t| t.is_present() && t.pos == pos);
        if !occupied {
            return pos;
        }
    }

    board.center()
}

impl GameState {
    /// Generate a fresh world: the standard room, then the player, the
    /// monsters, and the treasures, each at a sampled empty position.
    pub fn new(mut rng: GameRng) -> Self {
        let board = Board::standard();
        let player_pos = sample_empty_position(&board, None, &[], &[], &mut rng);

        let mut state = Self::with_board(board, Player::new(player_pos), rng);

        for _ in 0..NUM_MONSTERS {
            let pos = state.random_empty_position();
            state.add_monster(pos);
        }
        for _ in 0..NUM_TREASURES {
            let pos = state.random_empty_position();
            state.add_treasure(pos);
        }

        state.message("Welcome to AsciiQuest!");
        state.message("Collect all treasure ($) and watch out for monsters (M)!");
        state
    }

    /// Assemble a session from parts, with empty arenas.
    ///
    /// `new` populates this; tests use it to lay out exact scenarios.
    pub fn with_board(board: Board, player: Player, rng: GameRng) -> Self {
        Self {
            board,
            player,
            monsters: Vec::new(),
            treasures: Vec::new(),
            rng,
            status: GameStatus::Running,
            turns: 0,
            messages: Vec::new(),
            message_history: Vec::new(),
            next_monster_id: MonsterId(0),
            next_treasure_id: TreasureId(0),
            monsters_total: 0,
            treasures_total: 0,
        }
    }

    /// Add a message to display
    pub fn message(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        self.messages.push(msg.clone());
        self.message_history.push(msg);
    }

    /// Clear the current turn's messages
    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }

    /// Spawn a monster with random vitals at the given position
    pub fn add_monster(&mut self, pos: Position) -> MonsterId {
        let id = self.next_monster_id;
        self.next_monster_id = id.next();
        let monster = Monster::spawn(id, pos, &mut self.rng);
        self.monsters.push(monster);
        self.monsters_total += 1;
        id
    }

    /// Spawn a monster with fixed vitals at the given position
    pub fn add_monster_with_stats(&mut self, pos: Position, hp: i32, damage: i32) -> MonsterId {
        let id = self.next_monster_id;
        self.next_monster_id = id.next();
        self.monsters.push(Monster::with_stats(id, pos, hp, damage));
        self.monsters_total += 1;
        id
    }

    /// Spawn a treasure with a random value at the given position
    pub fn add_treasure(&mut self, pos: Position) -> TreasureId {
        let id = self.next_treasure_id;
        self.next_treasure_id = id.next();
        let treasure = Treasure::spawn(id, pos, &mut self.rng);
        self.treasures.push(treasure);
        self.treasures_total += 1;
        id
    }

    /// Spawn a treasure with an explicit value at the given position
    pub fn add_treasure_with_value(&mut self, pos: Position, value: i32) -> TreasureId {
        let id = self.next_treasure_id;
        self.next_treasure_id = id.next();
        self.treasures.push(Treasure::with_value(id, pos, value));
        self.treasures_total += 1;
        id
    }

    /// First alive monster at that exact cell, in spawn order.
    ///
    /// Monsters may stack; only the first is ever targetable.
    pub fn monster_at(&self, x: i32, y: i32) -> Option<MonsterId> {
        let pos = Position::new(x, y);
        self.monsters
            .iter()
            .find(|m| m.is_alive() && m.pos == pos)
            .map(|m| m.id())
    }

    /// Look up a monster by id
    pub fn monster(&self, id: MonsterId) -> Option<&Monster> {
        self.monsters.iter().find(|m| m.id() == id)
    }

    /// Look up a treasure by id
    pub fn treasure(&self, id: TreasureId) -> Option<&Treasure> {
        self.treasures.iter().find(|t| t.id() == id)
    }

    /// Uncollected treasures remaining
    pub fn treasure_count(&self) -> usize {
        self.treasures.iter().filter(|t| t.is_present()).count()
    }

    /// Monsters still standing
    pub fn alive_monster_count(&self) -> usize {
        self.monsters.iter().filter(|m| m.is_alive()).count()
    }

    /// Totals at world generation, for the summary figures
    pub fn monsters_total(&self) -> usize {
        self.monsters_total
    }

    pub fn treasures_total(&self) -> usize {
        self.treasures_total
    }

    /// Drop defeated monsters from the arena
    pub fn remove_dead_monsters(&mut self) {
        self.monsters.retain(|m| m.is_alive());
    }

    /// Drop collected treasures from the arena
    pub fn remove_collected_treasures(&mut self) {
        self.treasures.retain(|t| t.is_present());
    }

    /// Sample a spawn position against the live entity set
    pub fn random_empty_position(&mut self) -> Position {
        sample_empty_position(
            &self.board,
            Some(&self.player),
            &self.monsters,
            &self.treasures,
            &mut self.rng,
        )
    }

    /// Evaluate the end conditions, in priority order: a fallen player
    /// loses before an empty board wins.
    ///
    /// The transition to Won applies the victory bonus, plus the flawless
    /// bonus when the player is at full health at that instant. Calling
    /// this after the game ended just reports the terminal outcome again.
    pub fn check_game_end(&mut self) -> Option<TurnOutcome> {
        match self.status {
            GameStatus::Won => return Some(TurnOutcome::Won),
            GameStatus::Lost => return Some(TurnOutcome::Lost),
            GameStatus::Abandoned => return Some(TurnOutcome::Abandoned),
            GameStatus::Running => {}
        }

        if !self.player.is_alive() {
            self.status = GameStatus::Lost;
            return Some(TurnOutcome::Lost);
        }

        if self.treasure_count() == 0 {
            self.status = GameStatus::Won;
            let mut bonus = VICTORY_BONUS;
            if self.player.hp() == self.player.hp_max() {
                bonus += FLAWLESS_BONUS;
            }
            self.player.add_score(bonus);
            self.message("You collected all the treasure!");
            return Some(TurnOutcome::Won);
        }

        None
    }

    /// Final figures for the game-over screen
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            status: self.status,
            score: self.player.score(),
            hp: self.player.hp(),
            hp_max: self.player.hp_max(),
            treasures_collected: self.treasures_total - self.treasure_count(),
            treasures_total: self.treasures_total,
            monsters_defeated: self.monsters_total - self.alive_monster_count(),
            monsters_total: self.monsters_total,
        }
    }

    /// Resolve the player's move: blocked, melee, or step-and-collect.
    fn process_player_move(&mut self, dx: i32, dy: i32) {
        let target = self.player.pos.offset(dx, dy);

        if !self.board.is_valid_position(target.x, target.y) {
            self.message("You can't move there!");
            return;
        }

        // Walking into a monster attacks it in place.
        let swing = {
            let rng = &mut self.rng;
            self.monsters
                .iter_mut()
                .find(|m| m.is_alive() && m.pos == target)
                .map(|monster| combat::player_attacks_monster(monster, rng))
        };
        if let Some(result) = swing {
            self.message("You attack a monster!");
            if result.defeated {
                self.player.add_score(MONSTER_KILL_SCORE);
                self.message("You defeated the monster!");
            } else {
                self.message("The monster is wounded!");
            }
            return;
        }

        self.player.pos = target;

        let mut found = None;
        for treasure in &mut self.treasures {
            if treasure.collect_by(&mut self.player) {
                found = Some(treasure.value());
                break;
            }
        }
        if let Some(value) = found {
            self.message(format!("You found treasure worth {value} points!"));
            self.remove_collected_treasures();
        }
    }

    /// Every alive monster takes its chase step, then the fallen are
    /// pruned.
    fn process_monster_turns(&mut self) {
        let target = self.player.pos;
        for monster in &mut self.monsters {
            monster.step_towards(target, &self.board);
        }
        self.remove_dead_monsters();
    }

    /// Adjacent monsters strike, in spawn order. A lethal hit stops the
    /// iteration: monsters behind the killer do not attack this turn.
    fn process_collisions(&mut self) {
        let mut events = Vec::new();
        for monster in &self.monsters {
            if let Some(damage) = combat::monster_attacks_player(monster, &mut self.player) {
                events.push(format!("A monster attacks you for {damage} damage!"));
                if !self.player.is_alive() {
                    events.push("You have been defeated!".to_string());
                    break;
                }
            }
        }
        for event in events {
            self.message(event);
        }
    }
}

/// Game loop controller
pub struct GameLoop {
    state: GameState,
}

impl GameLoop {
    /// Create a new game loop with the given state
    pub fn new(state: GameState) -> Self {
        Self { state }
    }

    /// Get reference to game state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get mutable reference to game state
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Consume the game loop and return the owned game state
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Execute a single turn.
    ///
    /// The end conditions are evaluated before the command is consumed,
    /// so a turn that begins on a finished board never processes input.
    pub fn tick(&mut self, command: Command) -> TurnOutcome {
        self.state.clear_messages();

        if let Some(outcome) = self.state.check_game_end() {
            return outcome;
        }

        match command {
            Command::Quit => {
                self.state.status = GameStatus::Abandoned;
                return TurnOutcome::Abandoned;
            }
            Command::Move(direction) => {
                let (dx, dy) = direction.delta();
                self.state.process_player_move(dx, dy);

                // Monsters only act against a standing player.
                if self.state.player.is_alive() {
                    self.state.process_monster_turns();
                    self.state.process_collisions();
                }
            }
        }

        self.state.turns += 1;
        TurnOutcome::Continue
    }
}
