//! Shared test utilities and scripted repositories.

#![allow(dead_code, unused_imports)]

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use herolist::data::{HeroRepository, RepositoryError};
use herolist::model::Hero;
use herolist::ui::heroes::{HeroUiState, HeroesViewModel, WARM_UP};
use parking_lot::Mutex;
use tempfile::TempDir;

/// One scripted answer: how long the call takes and what it returns.
pub enum Reply {
    Heroes(Duration, Vec<Hero>),
    Io(Duration),
    Generic(Duration),
}

/// Repository that answers each call with the next scripted reply.
///
/// Calls beyond the script fail with a generic error.
pub struct ScriptedRepository {
    replies: Mutex<VecDeque<Reply>>,
    calls: Mutex<usize>,
}

impl ScriptedRepository {
    pub fn new(replies: Vec<Reply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock()
    }
}

#[async_trait]
impl HeroRepository for ScriptedRepository {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn fetch_all(&self) -> Result<Vec<Hero>, RepositoryError> {
        *self.calls.lock() += 1;
        let reply = self.replies.lock().pop_front();
        match reply {
            Some(Reply::Heroes(delay, heroes)) => {
                tokio::time::sleep(delay).await;
                Ok(heroes)
            }
            Some(Reply::Io(delay)) => {
                tokio::time::sleep(delay).await;
                Err(std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset").into())
            }
            Some(Reply::Generic(delay)) => {
                tokio::time::sleep(delay).await;
                Err(RepositoryError::generic("bad payload"))
            }
            None => Err(RepositoryError::generic("script exhausted")),
        }
    }
}

pub fn hero(tag: &str) -> Hero {
    Hero::new(
        &format!("{tag}_name"),
        &format!("{tag}_description"),
        &format!("{tag}_image"),
    )
}

pub fn names(state: &HeroUiState) -> Option<Vec<String>> {
    state
        .heroes()
        .map(|heroes| heroes.iter().map(|h| h.name.key().to_string()).collect())
}

pub fn view_model(replies: Vec<Reply>) -> (HeroesViewModel, Arc<ScriptedRepository>) {
    let repo = ScriptedRepository::new(replies);
    let vm = HeroesViewModel::new(repo.clone());
    (vm, repo)
}

/// Advance paused time and let spawned fetches run.
pub async fn advance(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Write `content` to a file in a fresh temporary directory.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (dir, path)
}
