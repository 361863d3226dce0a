//! Status line widget

use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Widget};

use aq_core::GameState;

use crate::theme::Theme;

/// Widget for rendering the status line under the map
pub struct StatusWidget<'a> {
    state: &'a GameState,
    theme: &'a Theme,
}

impl<'a> StatusWidget<'a> {
    pub fn new(state: &'a GameState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let player = &self.state.player;

        // Low health turns red at a third of the maximum.
        let hp_color = if player.hp() * 3 <= player.hp_max() {
            self.theme.bad
        } else {
            self.theme.good
        };

        let line = Line::from(vec![
            Span::styled("HP: ", Style::default().fg(self.theme.text)),
            Span::styled(
                format!("{}/{}", player.hp(), player.hp_max()),
                Style::default().fg(hp_color),
            ),
            Span::styled(
                format!(
                    " | Score: {} | Treasures left: {} | Monsters left: {}",
                    player.score(),
                    self.state.treasure_count(),
                    self.state.alive_monster_count(),
                ),
                Style::default().fg(self.theme.text),
            ),
        ]);

        Paragraph::new(line).render(area, buf);
    }
}
