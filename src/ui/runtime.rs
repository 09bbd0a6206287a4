use std::time::Instant;

use anyhow::Context;

use crate::config::Config;
use crate::data::{AppContainer, DefaultAppContainer};
use crate::ui::animation::CascadeSpec;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::heroes::HeroesViewModel;
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::theme::Theme;

/// Run the roster screen until the user quits.
///
/// Must be called with a multi-thread tokio runtime entered; fetches run on
/// its workers while this thread draws.
pub fn run(config: &Config) -> anyhow::Result<()> {
    let container = DefaultAppContainer::from_config(config);
    let view_model = HeroesViewModel::from_container(&container);
    let animation = config
        .animation
        .enabled
        .then(|| CascadeSpec::from(&config.animation));
    let mut app = App::new(
        view_model,
        container.resources(),
        Theme::from(config.ui.theme),
        config.animation.row_height,
        animation,
    );

    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate);

    loop {
        let now = Instant::now();
        app.sync_state(now);
        terminal.draw(|frame| draw(frame, &app, now))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("Roster screen closed");
    Ok(())
}
