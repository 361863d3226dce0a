//! aq-tui: Terminal UI layer using ratatui
//!
//! Provides the terminal interface for the game.

pub mod app;
pub mod input;
pub mod theme;
pub mod widgets;

pub use app::{App, UiMode};
pub use theme::Theme;
