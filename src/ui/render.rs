use std::time::Instant;

use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::heroes::{render_heroes_body, HeroUiState, ScreenContext};
use crate::ui::layout::layout_regions;

pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let (header, body, footer) = layout_regions(frame.area());
    let theme = app.theme();

    let title = app.resources().label("app_name");
    frame.render_widget(Header::new(title).widget(theme), header);

    let ctx = ScreenContext {
        resources: app.resources(),
        theme,
        scroll: app.scroll(),
        row_height: app.row_height(),
        spinner_tick: app.spinner_tick(),
        cascade: app.cascade_frame(now),
    };
    render_heroes_body(frame, body, app.state(), &ctx);

    let status = status_text(app.state());
    frame.render_widget(Footer::new(&status).widget(footer, theme), footer);
}

fn status_text(state: &HeroUiState) -> String {
    match state {
        HeroUiState::Loading => "loading".to_string(),
        HeroUiState::Success { heroes } => format!("{} heroes", heroes.len()),
        HeroUiState::Error => "error".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_reflects_state() {
        assert_eq!(status_text(&HeroUiState::Loading), "loading");
        assert_eq!(status_text(&HeroUiState::Error), "error");
        assert_eq!(
            status_text(&HeroUiState::Success {
                heroes: Vec::new().into()
            }),
            "0 heroes"
        );
    }
}
