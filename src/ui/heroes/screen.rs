//! Rendering of the roster body: one branch per [`HeroUiState`] variant.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::model::{Hero, ResourceTable};
use crate::ui::animation::CascadeFrame;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::Theme;

use super::state::HeroUiState;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Below this list opacity rows are drawn dimmed.
const DIM_BELOW_ALPHA: f32 = 0.5;

/// Everything besides the state that the body needs to draw itself.
pub struct ScreenContext<'a> {
    pub resources: &'a ResourceTable,
    pub theme: &'a Theme,
    pub scroll: usize,
    pub row_height: u16,
    pub spinner_tick: u8,
    pub cascade: Option<CascadeFrame<'a>>,
}

pub fn render_heroes_body(
    frame: &mut Frame,
    area: Rect,
    state: &HeroUiState,
    ctx: &ScreenContext<'_>,
) {
    frame.render_widget(Clear, area);
    match state {
        HeroUiState::Loading => render_loading(frame, area, ctx),
        HeroUiState::Success { heroes } => render_list(frame, area, heroes, ctx),
        HeroUiState::Error => render_error(frame, area, ctx),
    }
}

fn render_loading(frame: &mut Frame, area: Rect, ctx: &ScreenContext<'_>) {
    let spinner = SPINNER_FRAMES[usize::from(ctx.spinner_tick) % SPINNER_FRAMES.len()];
    let line = Line::from(vec![
        Span::styled(
            format!("{} ", ctx.resources.drawable_key("loading_img")),
            Style::default().fg(ctx.theme.title),
        ),
        Span::styled(format!("{spinner} "), Style::default().fg(ctx.theme.accent)),
        Span::styled(
            format!("{}...", ctx.resources.label("loading")),
            Style::default().fg(ctx.theme.text),
        ),
    ]);
    let width = line.width() as u16;
    let rect = centered_rect_by_size(area, width, 1);
    frame.render_widget(Paragraph::new(line), rect);
}

fn render_error(frame: &mut Frame, area: Rect, ctx: &ScreenContext<'_>) {
    let theme = ctx.theme;
    let button = Style::default()
        .fg(theme.text)
        .bg(theme.highlight)
        .add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled(
            format!(
                "{} {}",
                ctx.resources.drawable_key("ic_connection_error"),
                ctx.resources.label("connection_error")
            ),
            Style::default().fg(theme.error),
        )),
        Line::from(Span::styled(
            ctx.resources.label("loading_failed"),
            Style::default().fg(theme.text),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {} ", ctx.resources.label("retry")),
            button,
        )),
        Line::from(Span::styled(
            "press r or Enter",
            Style::default().fg(theme.muted),
        )),
    ];

    let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let rect = centered_rect_by_size(area, width.saturating_add(4), lines.len() as u16);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rect);
}

fn render_list(frame: &mut Frame, area: Rect, heroes: &[Hero], ctx: &ScreenContext<'_>) {
    if heroes.is_empty() {
        let line = Line::from(Span::styled(
            "No heroes to show",
            Style::default().fg(ctx.theme.muted),
        ));
        let rect = centered_rect_by_size(area, line.width() as u16, 1);
        frame.render_widget(Paragraph::new(line), rect);
        return;
    }

    let row_height = ctx.row_height.max(1);
    let dim = ctx
        .cascade
        .is_some_and(|cascade| cascade.alpha() < DIM_BELOW_ALPHA);
    let bottom = u32::from(area.y) + u32::from(area.height);

    for (slot, (index, hero)) in heroes.iter().enumerate().skip(ctx.scroll).enumerate() {
        let slot_y = u32::from(area.y) + slot as u32 * u32::from(row_height);
        if slot_y >= bottom {
            break;
        }
        let offset = ctx.cascade.map_or(0, |cascade| cascade.row_offset(index));
        let y = slot_y + u32::from(offset);
        if y >= bottom {
            continue;
        }
        let height = (bottom - y).min(u32::from(row_height)) as u16;
        let rect = Rect::new(area.x, y as u16, area.width, height);
        render_hero_row(frame, rect, hero, ctx, dim);
    }
}

fn render_hero_row(
    frame: &mut Frame,
    area: Rect,
    hero: &Hero,
    ctx: &ScreenContext<'_>,
    dim: bool,
) {
    let theme = ctx.theme;
    let mut name_style = Style::default().fg(theme.text).add_modifier(Modifier::BOLD);
    let mut description_style = Style::default().fg(theme.muted);
    if dim {
        name_style = name_style.add_modifier(Modifier::DIM);
        description_style = description_style.add_modifier(Modifier::DIM);
    }

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", ctx.resources.drawable(&hero.image)),
                Style::default().fg(theme.title),
            ),
            Span::styled(ctx.resources.string(&hero.name).to_string(), name_style),
        ]),
        Line::from(Span::styled(
            ctx.resources.string(&hero.description).to_string(),
            description_style,
        )),
    ];

    let paragraph = Paragraph::new(lines);
    if ctx.row_height >= 4 {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.card_border));
        frame.render_widget(paragraph.block(block), area);
    } else {
        frame.render_widget(paragraph, area);
    }
}
