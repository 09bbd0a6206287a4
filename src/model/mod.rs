//! Domain types shown by the roster screen.

mod hero;
mod resources;

pub use hero::{DrawableRes, Hero, StringRes};
pub use resources::ResourceTable;
