use crate::ui::mvi::Reducer;

use super::intent::HeroIntent;
use super::state::HeroUiState;

pub struct HeroesReducer;

impl Reducer for HeroesReducer {
    type State = HeroUiState;
    type Intent = HeroIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            HeroIntent::Refresh => HeroUiState::Loading,
            HeroIntent::Loaded { heroes } => HeroUiState::Success {
                heroes: heroes.into(),
            },
            HeroIntent::Failed => HeroUiState::Error,
        }
    }
}
