//! Repository contract consumed by the roster controller.

use async_trait::async_trait;
use thiserror::Error;

use crate::model::Hero;

/// Errors a hero source can report.
///
/// The controller collapses both kinds into a single error screen; the kind
/// only reaches the logs.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("I/O failure while fetching heroes: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to fetch heroes: {message}")]
    Generic { message: String },
}

/// Coarse failure category kept for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Io,
    Generic,
}

impl RepositoryError {
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            RepositoryError::Io(_) => FailureKind::Io,
            RepositoryError::Generic { .. } => FailureKind::Generic,
        }
    }
}

/// Source of the ordered hero list.
#[async_trait]
pub trait HeroRepository: Send + Sync {
    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    /// Fetch every hero, in display order. An empty list is a valid answer.
    async fn fetch_all(&self) -> Result<Vec<Hero>, RepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_follows_variant() {
        let io = RepositoryError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "gone",
        ));
        assert_eq!(io.kind(), FailureKind::Io);
        assert_eq!(RepositoryError::generic("bad").kind(), FailureKind::Generic);
    }

    #[test]
    fn display_includes_message() {
        let err = RepositoryError::generic("catalogue is corrupt");
        assert_eq!(err.to_string(), "Failed to fetch heroes: catalogue is corrupt");
    }
}
