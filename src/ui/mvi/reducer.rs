use super::intent::Intent;
use super::state::UiState;

/// The only place where a state transition is computed.
///
/// Must stay a pure function: no I/O, no clocks, no shared state.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
