//! aq-core: Core game logic for AsciiQuest
//!
//! This crate contains all simulation logic with no I/O dependencies.
//! It is designed to be pure and testable: the terminal front end in
//! `aq-tui` feeds it one [`action::Command`] per turn and reads back a
//! render snapshot plus the narrative messages the turn produced.

pub mod action;
pub mod board;
pub mod combat;
pub mod entity;
pub mod snapshot;

mod consts;
mod error;
mod gameloop;
mod position;
mod rng;

pub use consts::*;
pub use error::GameError;
pub use gameloop::{GameLoop, GameState, GameStatus, GameSummary, TurnOutcome};
pub use position::Position;
pub use rng::GameRng;
