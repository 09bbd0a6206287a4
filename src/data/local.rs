use async_trait::async_trait;

use super::repository::{HeroRepository, RepositoryError};
use crate::model::Hero;

/// Built-in roster compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalHeroRepository;

impl LocalHeroRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn heroes() -> Vec<Hero> {
        (1..=6)
            .map(|n| {
                Hero::new(
                    &format!("hero{n}"),
                    &format!("description{n}"),
                    &format!("android_superhero{n}"),
                )
            })
            .collect()
    }
}

#[async_trait]
impl HeroRepository for LocalHeroRepository {
    fn name(&self) -> &'static str {
        "builtin"
    }

    async fn fetch_all(&self) -> Result<Vec<Hero>, RepositoryError> {
        Ok(Self::heroes())
    }
}
