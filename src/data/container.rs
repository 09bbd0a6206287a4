//! Dependency wiring for the roster screen.

use std::sync::Arc;

use super::file::FileHeroRepository;
use super::local::LocalHeroRepository;
use super::repository::HeroRepository;
use crate::config::Config;
use crate::model::ResourceTable;

/// Everything the screen needs from the outside world.
pub trait AppContainer {
    fn hero_repository(&self) -> Arc<dyn HeroRepository>;
    fn resources(&self) -> Arc<ResourceTable>;
}

/// Container built from configuration. The same instances are handed out on
/// every call.
pub struct DefaultAppContainer {
    hero_repository: Arc<dyn HeroRepository>,
    resources: Arc<ResourceTable>,
}

impl DefaultAppContainer {
    pub fn from_config(config: &Config) -> Self {
        let hero_repository: Arc<dyn HeroRepository> = match &config.data.heroes_file {
            Some(path) => Arc::new(FileHeroRepository::new(path.clone())),
            None => Arc::new(LocalHeroRepository::new()),
        };
        let resources =
            ResourceTable::builtin().with_overrides(&config.strings, &config.drawables);
        Self {
            hero_repository,
            resources: Arc::new(resources),
        }
    }
}

impl AppContainer for DefaultAppContainer {
    fn hero_repository(&self) -> Arc<dyn HeroRepository> {
        Arc::clone(&self.hero_repository)
    }

    fn resources(&self) -> Arc<ResourceTable> {
        Arc::clone(&self.resources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn builtin_repository_without_file() {
        let container = DefaultAppContainer::from_config(&Config::default());
        assert_eq!(container.hero_repository().name(), "builtin");
    }

    #[test]
    fn file_repository_when_configured() {
        let mut config = Config::default();
        config.data.heroes_file = Some(PathBuf::from("/tmp/heroes.toml"));
        let container = DefaultAppContainer::from_config(&config);
        assert_eq!(container.hero_repository().name(), "file");
    }

    #[test]
    fn resources_include_overrides() {
        let mut config = Config::default();
        config
            .strings
            .insert("app_name".to_string(), "Roster".to_string());
        let container = DefaultAppContainer::from_config(&config);
        assert_eq!(container.resources().label("app_name"), "Roster");
    }
}
