//! Hero roster screen.
//!
//! Uses MVI:
//! - `state.rs` - the three-way screen state
//! - `intent.rs` - refresh requests and fetch outcomes
//! - `reducer.rs` - state transitions
//! - `view_model.rs` - fetch orchestration and stale-result discard
//! - `screen.rs` - rendering of the three branches

mod intent;
mod reducer;
mod screen;
mod state;
mod view_model;

pub use intent::HeroIntent;
pub use reducer::HeroesReducer;
pub use screen::{render_heroes_body, ScreenContext};
pub use state::HeroUiState;
pub use view_model::{HeroesViewModel, WARM_UP};
