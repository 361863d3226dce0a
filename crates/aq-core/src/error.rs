//! Error types
//!
//! The turn pipeline itself has no recoverable errors: blocked moves and
//! the like are ordinary game events, reported through the message
//! buffer. The only typed error is a construction-time one.

use thiserror::Error;

/// Errors raised while setting up a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// A board needs at least one interior cell inside its border.
    #[error("board too small: {width}x{height} (minimum 3x3)")]
    BoardTooSmall { width: i32, height: i32 },
}
