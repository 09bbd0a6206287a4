//! Fetch orchestration for the roster screen.
//!
//! Each `retry()` opens a new epoch. A finished fetch only publishes if its
//! epoch is still the latest one, so a slow, superseded attempt can never
//! overwrite the result of a newer attempt. Superseded calls are not
//! cancelled; their results are dropped.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::data::{AppContainer, FailureKind, HeroRepository};
use crate::ui::mvi::Reducer;

use super::intent::HeroIntent;
use super::reducer::HeroesReducer;
use super::state::HeroUiState;

/// Minimum time the loading screen stays up before the repository is called.
pub const WARM_UP: Duration = Duration::from_millis(500);

pub struct HeroesViewModel {
    inner: Arc<Inner>,
}

struct Inner {
    repository: Arc<dyn HeroRepository>,
    state: watch::Sender<HeroUiState>,
    /// Written only while holding the state channel's write lock.
    epoch: AtomicU64,
    last_failure: Mutex<Option<FailureKind>>,
}

impl HeroesViewModel {
    /// Create the controller and start the initial fetch.
    ///
    /// Must be called from within a tokio runtime context.
    pub fn new(repository: Arc<dyn HeroRepository>) -> Self {
        let (state, _) = watch::channel(HeroUiState::default());
        let view_model = Self {
            inner: Arc::new(Inner {
                repository,
                state,
                epoch: AtomicU64::new(0),
                last_failure: Mutex::new(None),
            }),
        };
        view_model.retry();
        view_model
    }

    pub fn from_container(container: &dyn AppContainer) -> Self {
        Self::new(container.hero_repository())
    }

    /// Latest published state.
    pub fn current_state(&self) -> HeroUiState {
        self.inner.state.borrow().clone()
    }

    /// Receiver notified on every publication.
    pub fn subscribe(&self) -> watch::Receiver<HeroUiState> {
        self.inner.state.subscribe()
    }

    /// Start a fresh fetch attempt.
    ///
    /// `Loading` is visible as soon as this returns. Calling it while an
    /// attempt is in flight is fine; the older attempt's result is discarded.
    pub fn retry(&self) {
        let mut epoch = 0;
        self.inner.state.send_modify(|state| {
            epoch = self.inner.epoch.fetch_add(1, Ordering::SeqCst) + 1;
            *state = HeroesReducer::reduce(std::mem::take(state), HeroIntent::Refresh);
        });
        tracing::info!(
            epoch,
            repository = self.inner.repository.name(),
            "Fetching heroes"
        );

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            inner.fetch(epoch).await;
        });
    }

    /// Number of fetch attempts started so far.
    pub fn epoch(&self) -> u64 {
        self.inner.epoch.load(Ordering::SeqCst)
    }

    /// Kind of the most recent failure that reached the screen, if the
    /// current state is `Error`.
    pub fn last_failure(&self) -> Option<FailureKind> {
        *self.inner.last_failure.lock()
    }
}

impl Inner {
    async fn fetch(&self, epoch: u64) {
        tokio::time::sleep(WARM_UP).await;

        let (intent, failure) = match self.repository.fetch_all().await {
            Ok(heroes) => (HeroIntent::Loaded { heroes }, None),
            Err(err) => {
                tracing::warn!(epoch, kind = ?err.kind(), error = %err, "Hero fetch failed");
                (HeroIntent::Failed, Some(err.kind()))
            }
        };

        if !self.publish(epoch, intent, failure) {
            tracing::debug!(
                epoch,
                latest = self.epoch.load(Ordering::SeqCst),
                "Discarded result of superseded fetch"
            );
        }
    }

    /// Apply `intent` if `epoch` is still current. Returns whether it was applied.
    fn publish(&self, epoch: u64, intent: HeroIntent, failure: Option<FailureKind>) -> bool {
        self.state.send_if_modified(|state| {
            if self.epoch.load(Ordering::SeqCst) != epoch {
                return false;
            }
            *state = HeroesReducer::reduce(std::mem::take(state), intent);
            *self.last_failure.lock() = failure;
            match state {
                HeroUiState::Success { heroes } => {
                    tracing::info!(epoch, count = heroes.len(), "Heroes loaded");
                }
                HeroUiState::Error => tracing::info!(epoch, "Showing error screen"),
                HeroUiState::Loading => {}
            }
            true
        })
    }
}
