//! End-to-end turn scenarios

use aq_core::action::{Command, Direction};
use aq_core::board::Board;
use aq_core::entity::Player;
use aq_core::{
    GameLoop, GameRng, GameState, GameStatus, Position, TurnOutcome, MONSTER_KILL_SCORE,
    PLAYER_MAX_HP,
};

fn blank_state(player_pos: Position, seed: u64) -> GameState {
    GameState::with_board(
        Board::new(10, 10).unwrap(),
        Player::new(player_pos),
        GameRng::new(seed),
    )
}

fn count_attack_messages(state: &GameState) -> usize {
    state
        .messages
        .iter()
        .filter(|m| m.starts_with("A monster attacks you"))
        .count()
}

#[test]
fn defeating_a_weak_monster_scores_and_prunes() {
    let mut state = blank_state(Position::new(2, 2), 1);
    let monster_id = state.add_monster_with_stats(Position::new(3, 2), 1, 5);
    state.add_treasure_with_value(Position::new(8, 8), 10);

    let mut game = GameLoop::new(state);
    let outcome = game.tick(Command::Move(Direction::East));
    assert_eq!(outcome, TurnOutcome::Continue);

    let state = game.state();
    // Any swing deals at least 15; the 1 hp monster cannot survive it.
    assert_eq!(state.player.score(), MONSTER_KILL_SCORE);
    assert_eq!(state.player.pos, Position::new(2, 2));
    assert!(state
        .messages
        .contains(&"You defeated the monster!".to_string()));
    // Pruned from the arena by the end of the turn.
    assert!(state.monster(monster_id).is_none());
    assert_eq!(state.alive_monster_count(), 0);
    assert!(state.monsters.is_empty());
}

#[test]
fn collecting_the_last_treasure_wins_with_bonus() {
    let mut state = blank_state(Position::new(2, 2), 1);
    state.add_treasure_with_value(Position::new(3, 2), 10);
    state.add_treasure_with_value(Position::new(4, 2), 20);

    let mut game = GameLoop::new(state);

    assert_eq!(game.tick(Command::Move(Direction::East)), TurnOutcome::Continue);
    assert!(game
        .state()
        .messages
        .contains(&"You found treasure worth 10 points!".to_string()));

    assert_eq!(game.tick(Command::Move(Direction::East)), TurnOutcome::Continue);
    assert_eq!(game.state().player.score(), 30);
    assert_eq!(game.state().treasure_count(), 0);

    // The win lands on the next end-check, before any input is consumed.
    let outcome = game.tick(Command::Move(Direction::East));
    assert_eq!(outcome, TurnOutcome::Won);

    let state = game.state();
    assert_eq!(state.status, GameStatus::Won);
    // Untouched hero: victory bonus plus the flawless bonus.
    assert_eq!(state.player.score(), 30 + 100 + 50);
    assert_eq!(state.player.pos, Position::new(4, 2));

    let summary = state.summary();
    assert_eq!(summary.treasures_collected, 2);
    assert_eq!(summary.treasures_total, 2);
    assert_eq!(summary.score, 180);
}

#[test]
fn wounded_winner_misses_the_flawless_bonus() {
    let mut state = blank_state(Position::new(2, 2), 1);
    state.add_treasure_with_value(Position::new(3, 2), 10);
    state.player.take_damage(1);

    let mut game = GameLoop::new(state);
    game.tick(Command::Move(Direction::East));
    let outcome = game.tick(Command::Move(Direction::East));
    assert_eq!(outcome, TurnOutcome::Won);
    assert_eq!(game.state().player.score(), 10 + 100);
}

#[test]
fn lethal_pile_up_stops_at_the_killing_blow() {
    let mut state = blank_state(Position::new(5, 5), 1);
    state.add_treasure_with_value(Position::new(1, 1), 10);
    // Three attackers in spawn order; each hits for 60, the player has
    // 100 hp, so the second blow is lethal and the third never lands.
    state.add_monster_with_stats(Position::new(4, 5), 1000, 60);
    state.add_monster_with_stats(Position::new(7, 3), 1000, 60);
    state.add_monster_with_stats(Position::new(7, 7), 1000, 60);

    let mut game = GameLoop::new(state);
    // Step east onto a free cell; every monster closes in to adjacency.
    let outcome = game.tick(Command::Move(Direction::East));
    assert_eq!(outcome, TurnOutcome::Continue);

    let state = game.state();
    assert_eq!(state.player.hp(), 0);
    assert!(!state.player.is_alive());
    assert_eq!(count_attack_messages(state), 2);
    assert!(state
        .messages
        .contains(&"You have been defeated!".to_string()));

    // The loss is recorded on the next end-check.
    let outcome = game.tick(Command::Move(Direction::East));
    assert_eq!(outcome, TurnOutcome::Lost);
    assert_eq!(game.state().status, GameStatus::Lost);
}

#[test]
fn terminal_states_are_sticky_and_bonus_applies_once() {
    let mut state = blank_state(Position::new(2, 2), 1);
    state.add_treasure_with_value(Position::new(3, 2), 10);

    let mut game = GameLoop::new(state);
    game.tick(Command::Move(Direction::East));
    assert_eq!(game.tick(Command::Move(Direction::East)), TurnOutcome::Won);
    let score_at_win = game.state().player.score();

    assert_eq!(game.tick(Command::Move(Direction::East)), TurnOutcome::Won);
    assert_eq!(game.tick(Command::Quit), TurnOutcome::Won);
    assert_eq!(game.state().player.score(), score_at_win);
    assert_eq!(game.state().status, GameStatus::Won);
}

#[test]
fn quitting_abandons_without_bonus() {
    let mut state = blank_state(Position::new(2, 2), 1);
    state.add_treasure_with_value(Position::new(8, 8), 10);

    let mut game = GameLoop::new(state);
    let outcome = game.tick(Command::Quit);
    assert_eq!(outcome, TurnOutcome::Abandoned);

    let summary = game.state().summary();
    assert_eq!(summary.status, GameStatus::Abandoned);
    assert_eq!(summary.score, 0);
    assert_eq!(summary.hp, PLAYER_MAX_HP);
}

#[test]
fn stacked_monsters_expose_only_the_first() {
    let mut state = blank_state(Position::new(2, 2), 1);
    let first = state.add_monster_with_stats(Position::new(5, 5), 30, 10);
    let second = state.add_monster_with_stats(Position::new(5, 5), 30, 10);

    assert_eq!(state.monster_at(5, 5), Some(first));

    // Once the first falls, the lookup reveals the second.
    for m in &mut state.monsters {
        if m.id() == first {
            m.take_damage(999);
        }
    }
    assert_eq!(state.monster_at(5, 5), Some(second));
}

#[test]
fn same_seed_and_commands_replay_the_same_game() {
    let commands = [
        Command::Move(Direction::East),
        Command::Move(Direction::North),
        Command::Move(Direction::North),
        Command::Move(Direction::West),
        Command::Move(Direction::South),
        Command::Move(Direction::East),
        Command::Move(Direction::East),
        Command::Move(Direction::South),
    ];

    let mut game_a = GameLoop::new(GameState::new(GameRng::new(777)));
    let mut game_b = GameLoop::new(GameState::new(GameRng::new(777)));

    for command in commands {
        let outcome_a = game_a.tick(command);
        let outcome_b = game_b.tick(command);
        assert_eq!(outcome_a, outcome_b);
    }

    let json_a = serde_json::to_string(game_a.state()).unwrap();
    let json_b = serde_json::to_string(game_b.state()).unwrap();
    assert_eq!(json_a, json_b);
}

#[test]
fn generated_worlds_differ_across_seeds() {
    let state_a = GameState::new(GameRng::new(1));
    let state_b = GameState::new(GameRng::new(2));
    let json_a = serde_json::to_string(&state_a).unwrap();
    let json_b = serde_json::to_string(&state_b).unwrap();
    assert_ne!(json_a, json_b);
}
