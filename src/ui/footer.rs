use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::Theme;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " r: Retry │ ↑/↓: Scroll │ q: Quit";

pub struct Footer<'a> {
    status: &'a str,
}

impl<'a> Footer<'a> {
    pub fn new(status: &'a str) -> Self {
        Self { status }
    }

    pub fn widget(&self, area: Rect, theme: &Theme) -> Paragraph<'static> {
        let right = format!("{}  v{} ", self.status, VERSION);

        // Char count, not byte count, for the box-drawing separators.
        let hints_width = HINTS.chars().count();
        let right_width = right.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(right_width);

        let text_style = Style::default().fg(theme.text).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(HINTS, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(right, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.frame_border)),
            )
    }
}
