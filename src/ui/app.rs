use std::sync::Arc;
use std::time::Instant;

use ratatui::layout::Rect;
use tokio::sync::watch;

use crate::model::ResourceTable;
use crate::ui::animation::{CascadeFrame, CascadePlayer, CascadeSpec};
use crate::ui::heroes::{HeroUiState, HeroesViewModel};
use crate::ui::layout::layout_regions;
use crate::ui::theme::Theme;

/// Screen-level state owned by the UI thread.
///
/// The roster state itself lives in [`HeroesViewModel`]; `App` keeps the last
/// snapshot it rendered and everything that is purely presentational.
pub struct App {
    should_quit: bool,
    view_model: HeroesViewModel,
    state_rx: watch::Receiver<HeroUiState>,
    state: HeroUiState,
    resources: Arc<ResourceTable>,
    theme: Theme,
    /// `None` when entrance animation is disabled.
    cascade: Option<CascadePlayer>,
    scroll: usize,
    row_height: u16,
    spinner_tick: u8,
    size: Option<(u16, u16)>,
}

impl App {
    pub fn new(
        view_model: HeroesViewModel,
        resources: Arc<ResourceTable>,
        theme: Theme,
        row_height: u16,
        animation: Option<CascadeSpec>,
    ) -> Self {
        let mut state_rx = view_model.subscribe();
        let state = state_rx.borrow_and_update().clone();
        Self {
            should_quit: false,
            view_model,
            state_rx,
            state,
            resources,
            theme,
            cascade: animation.map(CascadePlayer::new),
            scroll: 0,
            row_height: row_height.max(1),
            spinner_tick: 0,
            size: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn state(&self) -> &HeroUiState {
        &self.state
    }

    pub fn resources(&self) -> &ResourceTable {
        &self.resources
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn row_height(&self) -> u16 {
        self.row_height
    }

    pub fn spinner_tick(&self) -> u8 {
        self.spinner_tick
    }

    pub fn view_model(&self) -> &HeroesViewModel {
        &self.view_model
    }

    /// Pull the latest publication from the controller.
    ///
    /// A freshly published `Success` starts a new entrance cascade; leaving
    /// `Success` stops it. Returns whether the state changed.
    pub fn sync_state(&mut self, now: Instant) -> bool {
        if !self.state_rx.has_changed().unwrap_or(false) {
            return false;
        }
        self.state = self.state_rx.borrow_and_update().clone();

        match &self.state {
            HeroUiState::Success { heroes } => {
                self.scroll = 0;
                if let Some(player) = self.cascade.as_mut() {
                    player.start(heroes.len(), now);
                }
            }
            HeroUiState::Loading | HeroUiState::Error => {
                if let Some(player) = self.cascade.as_mut() {
                    player.stop();
                }
            }
        }
        true
    }

    pub fn cascade_frame(&self, now: Instant) -> Option<CascadeFrame<'_>> {
        self.cascade.as_ref().and_then(|player| player.frame(now))
    }

    pub fn cascade_generation(&self) -> Option<u64> {
        self.cascade.as_ref().map(CascadePlayer::generation)
    }

    pub fn retry(&mut self) {
        self.view_model.retry();
    }

    pub fn on_tick(&mut self) {
        if self.state.is_loading() {
            self.spinner_tick = self.spinner_tick.wrapping_add(1);
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        self.clamp_scroll();
    }

    /// Move the first visible row by `delta` rows.
    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll = self.scroll.saturating_add_signed(delta);
        self.clamp_scroll();
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = usize::MAX;
        self.clamp_scroll();
    }

    /// Rows that fit in the body at the last known terminal size.
    pub fn page_rows(&self) -> usize {
        let Some((cols, rows)) = self.size else {
            return 1;
        };
        let (_, body, _) = layout_regions(Rect::new(0, 0, cols, rows));
        usize::from(body.height / self.row_height).max(1)
    }

    fn clamp_scroll(&mut self) {
        let len = self.state.heroes().map_or(0, <[_]>::len);
        let max_scroll = len.saturating_sub(self.page_rows());
        self.scroll = self.scroll.min(max_scroll);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::LocalHeroRepository;
    use crate::ui::heroes::WARM_UP;
    use std::time::Duration;

    fn make_app(animation: bool) -> App {
        let vm = HeroesViewModel::new(Arc::new(LocalHeroRepository::new()));
        App::new(
            vm,
            Arc::new(ResourceTable::builtin()),
            Theme::dark(),
            4,
            animation.then(CascadeSpec::default),
        )
    }

    async fn settle() {
        tokio::time::sleep(WARM_UP + Duration::from_millis(10)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn starts_loading() {
        let app = make_app(true);
        assert!(app.state().is_loading());
        assert!(app.cascade_frame(Instant::now()).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn success_starts_cascade() {
        let mut app = make_app(true);
        settle().await;
        assert!(app.sync_state(Instant::now()));
        assert_eq!(app.state().heroes().map(<[_]>::len), Some(6));
        assert_eq!(app.cascade_generation(), Some(1));
        assert!(!app.sync_state(Instant::now()));
        assert_eq!(app.cascade_generation(), Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn retry_after_success_starts_new_cascade() {
        let mut app = make_app(true);
        settle().await;
        app.sync_state(Instant::now());

        app.retry();
        assert!(app.sync_state(Instant::now()));
        assert!(app.state().is_loading());
        assert!(app.cascade_frame(Instant::now()).is_none());

        settle().await;
        app.sync_state(Instant::now());
        assert_eq!(app.cascade_generation(), Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn disabled_animation_has_no_frames() {
        let mut app = make_app(false);
        settle().await;
        app.sync_state(Instant::now());
        assert!(app.cascade_frame(Instant::now()).is_none());
        assert_eq!(app.cascade_generation(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn scroll_is_clamped_to_list() {
        let mut app = make_app(false);
        settle().await;
        app.sync_state(Instant::now());
        app.on_resize(80, 14);
        // 8 body lines / 4 per row = 2 rows per page, 6 heroes.
        assert_eq!(app.page_rows(), 2);
        app.scroll_to_bottom();
        assert_eq!(app.scroll(), 4);
        app.scroll_by(-10);
        assert_eq!(app.scroll(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn spinner_only_turns_while_loading() {
        let mut app = make_app(false);
        app.on_tick();
        assert_eq!(app.spinner_tick(), 1);
        settle().await;
        app.sync_state(Instant::now());
        app.on_tick();
        assert_eq!(app.spinner_tick(), 1);
    }
}
