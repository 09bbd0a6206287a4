use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::Theme;

/// Centered title bar.
pub struct Header<'a> {
    title: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }

    pub fn widget(&self, theme: &Theme) -> Paragraph<'a> {
        let line = Line::from(Span::styled(
            self.title,
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        ));

        Paragraph::new(line).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(theme.frame_border)),
        )
    }
}
