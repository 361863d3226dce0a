//! Message area widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::theme::Theme;

/// Widget for rendering the last turn's narrative messages
pub struct MessagesWidget<'a> {
    messages: &'a [String],
    theme: &'a Theme,
}

impl<'a> MessagesWidget<'a> {
    pub fn new(messages: &'a [String], theme: &'a Theme) -> Self {
        Self { messages, theme }
    }
}

impl Widget for MessagesWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(self.theme.text_dim));
        let inner = block.inner(area);
        block.render(area, buf);

        // Show as many of the latest messages as fit.
        let visible = inner.height as usize;
        let start = self.messages.len().saturating_sub(visible);
        let lines: Vec<Line> = self.messages[start..]
            .iter()
            .map(|m| Line::from(m.as_str()))
            .collect();

        Paragraph::new(lines)
            .style(Style::default().fg(self.theme.text))
            .render(inner, buf);
    }
}
