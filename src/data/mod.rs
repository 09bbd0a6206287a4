//! Hero sources and the wiring that picks one.
//!
//! ```text
//! Config ──→ AppContainer ──→ Arc<dyn HeroRepository> ──→ HeroesViewModel
//!                         └─→ ResourceTable ──────────────→ renderer
//! ```

mod container;
mod file;
mod local;
mod repository;

pub use container::{AppContainer, DefaultAppContainer};
pub use file::FileHeroRepository;
pub use local::LocalHeroRepository;
pub use repository::{FailureKind, HeroRepository, RepositoryError};
