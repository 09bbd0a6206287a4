//! Terminal superhero roster.
//!
//! The roster is fetched asynchronously by [`ui::heroes::HeroesViewModel`],
//! which publishes a three-way [`ui::heroes::HeroUiState`] and discards
//! results of superseded fetches. Rows enter with a staggered animation
//! planned by [`ui::animation::schedule_cascade`].

pub mod cli;
pub mod config;
pub mod data;
pub mod logging;
pub mod model;
pub mod ui;
