use std::sync::Arc;

use crate::model::Hero;
use crate::ui::mvi::UiState;

/// What the roster screen is currently showing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum HeroUiState {
    /// A fetch is pending. Initial state.
    #[default]
    Loading,

    /// The latest fetch returned these heroes, in repository order.
    Success { heroes: Arc<[Hero]> },

    /// The latest fetch failed. The cause is not kept.
    Error,
}

impl UiState for HeroUiState {}

impl HeroUiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    pub fn heroes(&self) -> Option<&[Hero]> {
        match self {
            Self::Success { heroes } => Some(heroes),
            _ => None,
        }
    }
}
