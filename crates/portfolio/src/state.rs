//! Shared application state.
//!
//! Cloned into every request handler. Holds the project repository as a trait
//! object; no other mutable state is shared between requests.

use std::{path::PathBuf, sync::Arc};

use portfolio_core::storage::{ProjectRepository, Result};

use crate::{config::Config, storage::SqliteRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Project repository.
    pub projects: Arc<dyn ProjectRepository>,
    /// Directory static assets are served from.
    pub static_dir: Arc<PathBuf>,
}

impl AppState {
    /// Creates a new AppState from an existing repository.
    pub fn new(projects: Arc<dyn ProjectRepository>, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            projects,
            static_dir: Arc::new(static_dir.into()),
        }
    }

    /// Creates an AppState backed by the configured SQLite file.
    ///
    /// The projects table is created if it does not exist yet.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let repo = SqliteRepository::open(&config.database_path).await?;

        tracing::info!(path = %repo.path().display(), "Using SQLite database");

        Ok(Self::new(Arc::new(repo), &config.static_dir))
    }
}
