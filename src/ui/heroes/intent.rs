use crate::model::Hero;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum HeroIntent {
    /// A new fetch attempt has started.
    Refresh,

    /// The current attempt returned a list.
    Loaded { heroes: Vec<Hero> },

    /// The current attempt failed.
    Failed,
}

impl Intent for HeroIntent {}
