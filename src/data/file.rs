//! Catalogue stored in a TOML file.
//!
//! ```toml
//! [[heroes]]
//! name = "hero1"
//! description = "description1"
//! image = "android_superhero1"
//! ```
//!
//! The file is read on every fetch, so editing it and pressing retry picks up
//! the change.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;

use super::repository::{HeroRepository, RepositoryError};
use crate::model::Hero;

#[derive(Debug, Deserialize)]
struct Catalogue {
    #[serde(default)]
    heroes: Vec<Hero>,
}

#[derive(Debug, Clone)]
pub struct FileHeroRepository {
    path: PathBuf,
}

impl FileHeroRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parse(&self, content: &str) -> Result<Vec<Hero>, RepositoryError> {
        let catalogue: Catalogue = toml::from_str(content).map_err(|e| {
            RepositoryError::generic(format!(
                "invalid catalogue '{}': {}",
                self.path.display(),
                e
            ))
        })?;
        Ok(catalogue.heroes)
    }
}

#[async_trait]
impl HeroRepository for FileHeroRepository {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn fetch_all(&self) -> Result<Vec<Hero>, RepositoryError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        self.parse(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_file_order() {
        let repo = FileHeroRepository::new("/tmp/heroes.toml");
        let heroes = repo
            .parse(
                r#"
[[heroes]]
name = "b"
description = "second letter"
image = "img_b"

[[heroes]]
name = "a"
description = "first letter"
image = "img_a"
"#,
            )
            .unwrap();
        let names: Vec<_> = heroes.iter().map(|h| h.name.key().to_string()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn parse_accepts_empty_catalogue() {
        let repo = FileHeroRepository::new("/tmp/heroes.toml");
        assert!(repo.parse("").unwrap().is_empty());
    }

    #[test]
    fn parse_error_is_generic() {
        let repo = FileHeroRepository::new("/tmp/heroes.toml");
        let err = repo.parse("[[heroes]]\nname = 3").unwrap_err();
        assert!(matches!(err, RepositoryError::Generic { .. }));
    }
}
