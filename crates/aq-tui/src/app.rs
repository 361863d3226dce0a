//! Application state and main UI controller

use crossterm::event::{Event, KeyCode};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use aq_core::action::Command;
use aq_core::{
    BOARD_HEIGHT, FLAWLESS_BONUS, GameLoop, GameState, GameStatus, TurnOutcome, VICTORY_BONUS,
};

use crate::input::key_to_command;
use crate::theme::Theme;
use crate::widgets::{MapWidget, MessagesWidget, StatusWidget};

/// UI mode - what the app is currently displaying/waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Title and controls, waiting for a key
    Welcome,
    /// Normal gameplay
    Playing,
    /// Final statistics, waiting for a key to exit
    GameOver,
}

/// Application state
pub struct App {
    /// Game loop controller
    game_loop: GameLoop,

    /// Should quit
    should_quit: bool,

    /// Current UI mode
    mode: UiMode,

    /// Color theme (adapts to light/dark terminal background)
    theme: Theme,
}

impl App {
    /// Create a new application around a freshly generated game
    pub fn new(state: GameState, theme: Theme) -> Self {
        Self {
            game_loop: GameLoop::new(state),
            should_quit: false,
            mode: UiMode::Welcome,
            theme,
        }
    }

    /// Get reference to game state
    pub fn state(&self) -> &GameState {
        self.game_loop.state()
    }

    pub fn mode(&self) -> UiMode {
        self.mode
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle input event - returns a command if one should be executed
    pub fn handle_event(&mut self, event: Event) -> Option<Command> {
        let Event::Key(key) = event else {
            return None;
        };

        match self.mode {
            UiMode::Welcome => {
                self.mode = UiMode::Playing;
                None
            }
            UiMode::Playing => key_to_command(key),
            UiMode::GameOver => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char('q') | KeyCode::Esc) {
                    self.should_quit = true;
                }
                None
            }
        }
    }

    /// Run one turn of the game and track the resulting screen
    pub fn execute(&mut self, command: Command) -> TurnOutcome {
        let outcome = self.game_loop.tick(command);
        if outcome != TurnOutcome::Continue {
            self.mode = UiMode::GameOver;
        }
        outcome
    }

    /// Render the full UI for the current mode
    pub fn render(&self, frame: &mut Frame) {
        // Layout: map at top, status line, messages at the bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(BOARD_HEIGHT as u16 + 2), // Map + border
                Constraint::Length(1),                    // Status line
                Constraint::Length(4),                    // Messages
            ])
            .split(frame.area());

        let state = self.game_loop.state();
        frame.render_widget(MapWidget::new(state, &self.theme), chunks[0]);
        frame.render_widget(StatusWidget::new(state, &self.theme), chunks[1]);
        frame.render_widget(MessagesWidget::new(&state.messages, &self.theme), chunks[2]);

        match self.mode {
            UiMode::Welcome => self.render_welcome(frame),
            UiMode::Playing => {}
            UiMode::GameOver => self.render_game_over(frame),
        }
    }

    /// Welcome overlay: title, goal, controls
    fn render_welcome(&self, frame: &mut Frame) {
        let area = centered_rect(60, 70, frame.area());
        frame.render_widget(Clear, area);

        let lines = vec![
            Line::from(Span::styled(
                "Welcome to AsciiQuest!",
                Style::default().fg(self.theme.accent).bold(),
            )),
            Line::from(""),
            Line::from("You are the hero (@) on a quest!"),
            Line::from("Collect all treasure ($) while avoiding monsters (M)!"),
            Line::from(""),
            Line::from(Span::styled(
                "Controls:",
                Style::default().fg(self.theme.accent),
            )),
            Line::from("  w / k / Up     - move up"),
            Line::from("  s / j / Down   - move down"),
            Line::from("  a / h / Left   - move left"),
            Line::from("  d / l / Right  - move right"),
            Line::from("  q / Esc        - quit"),
            Line::from(""),
            Line::from("Walk into monsters to attack them,"),
            Line::from("and watch your health - they hit back!"),
            Line::from(""),
            Line::from(Span::styled(
                "Press any key to begin...",
                Style::default().fg(self.theme.text_dim),
            )),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border));
        frame.render_widget(
            Paragraph::new(lines)
                .style(Style::default().fg(self.theme.text))
                .block(block)
                .centered(),
            area,
        );
    }

    /// Game-over overlay: outcome banner plus the final figures
    fn render_game_over(&self, frame: &mut Frame) {
        let area = centered_rect(60, 70, frame.area());
        frame.render_widget(Clear, area);

        let summary = self.game_loop.state().summary();

        let (banner, banner_color, flavor) = match summary.status {
            GameStatus::Won => (
                "VICTORY!",
                self.theme.good,
                "You have cleared this dungeon! Could there be more waiting for you...?",
            ),
            GameStatus::Lost => ("DEFEAT", self.theme.bad, "The dungeon claims another hero."),
            _ => (
                "QUEST ABANDONED",
                self.theme.text_dim,
                "The dungeon cries to be freed!",
            ),
        };

        let mut lines = vec![
            Line::from(Span::styled(
                banner,
                Style::default().fg(banner_color).bold(),
            )),
            Line::from(""),
            Line::from(flavor),
            Line::from(""),
            Line::from(Span::styled(
                "Final Stats:",
                Style::default().fg(self.theme.accent),
            )),
            Line::from(format!("  Final Score: {}", summary.score)),
            Line::from(format!(
                "  Health Remaining: {}/{}",
                summary.hp, summary.hp_max
            )),
            Line::from(format!(
                "  Treasures Collected: {}/{}",
                summary.treasures_collected, summary.treasures_total
            )),
            Line::from(format!(
                "  Monsters Defeated: {}/{}",
                summary.monsters_defeated, summary.monsters_total
            )),
        ];

        if summary.status == GameStatus::Won {
            let mut bonus = VICTORY_BONUS;
            if summary.hp == summary.hp_max {
                bonus += FLAWLESS_BONUS;
            }
            lines.push(Line::from(format!("  Victory Bonus: {bonus} points")));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press Enter to exit",
            Style::default().fg(self.theme.text_dim),
        )));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(banner_color));
        frame.render_widget(
            Paragraph::new(lines)
                .style(Style::default().fg(self.theme.text))
                .block(block)
                .centered(),
            area,
        );
    }
}

/// Center a percent-sized rect inside `r`
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use aq_core::GameRng;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn new_app() -> App {
        App::new(GameState::new(GameRng::new(42)), Theme::dark())
    }

    #[test]
    fn test_any_key_leaves_welcome() {
        let mut app = new_app();
        assert_eq!(app.mode(), UiMode::Welcome);
        let command = app.handle_event(press(KeyCode::Char('x')));
        assert_eq!(command, None);
        assert_eq!(app.mode(), UiMode::Playing);
    }

    #[test]
    fn test_quit_command_ends_on_game_over_screen() {
        let mut app = new_app();
        app.handle_event(press(KeyCode::Char('w')));
        let command = app.handle_event(press(KeyCode::Char('q'))).unwrap();
        let outcome = app.execute(command);
        assert_eq!(outcome, TurnOutcome::Abandoned);
        assert_eq!(app.mode(), UiMode::GameOver);
        assert!(!app.should_quit());

        app.handle_event(press(KeyCode::Enter));
        assert!(app.should_quit());
    }

    #[test]
    fn test_unknown_keys_do_nothing_while_playing() {
        let mut app = new_app();
        app.handle_event(press(KeyCode::Char(' ')));
        assert_eq!(app.mode(), UiMode::Playing);
        assert_eq!(app.handle_event(press(KeyCode::Char('z'))), None);
        assert_eq!(app.state().turns, 0);
    }
}
