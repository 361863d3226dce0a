//! Map display widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Widget};

use aq_core::GameState;
use aq_core::snapshot::{Glyph, render_grid};

use crate::theme::Theme;

/// Widget for rendering the dungeon room
pub struct MapWidget<'a> {
    state: &'a GameState,
    theme: &'a Theme,
}

impl<'a> MapWidget<'a> {
    pub fn new(state: &'a GameState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn glyph_display(&self, glyph: Glyph) -> (char, Style) {
        let color = match glyph {
            Glyph::Player => self.theme.map_player,
            Glyph::Monster => self.theme.map_monster,
            Glyph::Treasure => self.theme.map_treasure,
            Glyph::Wall => self.theme.map_wall,
            Glyph::Floor => self.theme.map_floor,
        };
        let style = match glyph {
            Glyph::Player => Style::default().fg(color).bold(),
            _ => Style::default().fg(color),
        };
        (glyph.symbol(), style)
    }
}

impl Widget for MapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" AsciiQuest ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border));
        let inner = block.inner(area);
        block.render(area, buf);

        let grid = render_grid(self.state);
        for (y, row) in grid.iter().enumerate() {
            if y as u16 >= inner.height {
                break;
            }
            for (x, glyph) in row.iter().enumerate() {
                if x as u16 >= inner.width {
                    break;
                }
                let (symbol, style) = self.glyph_display(*glyph);
                buf[(inner.x + x as u16, inner.y + y as u16)]
                    .set_char(symbol)
                    .set_style(style);
            }
        }
    }
}
