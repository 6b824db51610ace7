//! SQLite repository implementation.
//!
//! Implements `ProjectRepository` from `portfolio_core::storage` using SQLite.
//! Every operation opens its own connection and closes it before returning;
//! nothing is pooled or shared between calls.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use portfolio_core::project::{NewProject, Project};
use portfolio_core::storage::{ProjectRepository, Result};

use super::conversions::row_to_project;
use super::error::{map_open_error, map_tokio_rusqlite_error};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based project repository.
///
/// Holds only the database path. The file is created on first use.
#[derive(Debug, Clone)]
pub struct SqliteRepository {
    path: PathBuf,
}

impl SqliteRepository {
    /// Creates a repository backed by the database file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a repository and ensures its schema exists.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let repo = Self::new(path);
        repo.initialize().await?;
        Ok(repo)
    }

    /// Path of the backing database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Runs `f` on a freshly opened connection, then closes it.
    ///
    /// The connection is released whether or not `f` succeeds.
    async fn with_connection<F, R>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&mut rusqlite::Connection) -> tokio_rusqlite::Result<R> + Send + 'static,
        R: Send + 'static,
    {
        let conn = Connection::open(&self.path).await.map_err(map_open_error)?;

        let result = conn.call(f).await;

        if let Err(e) = conn.close().await {
            tracing::warn!(
                error = %e,
                path = %self.path.display(),
                "Failed to close SQLite connection"
            );
        }

        result.map_err(map_tokio_rusqlite_error)
    }
}

#[async_trait]
impl ProjectRepository for SqliteRepository {
    async fn initialize(&self) -> Result<()> {
        self.with_connection(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await?;

        tracing::debug!(path = %self.path.display(), "Projects schema ready");
        Ok(())
    }

    async fn create_project(&self, project: &NewProject) -> Result<i64> {
        let title = project.title.clone();
        let description = project.description.clone();
        let image_filename = project.stored_image_filename().to_string();

        self.with_connection(move |conn| {
            conn.execute(
                schema::INSERT_PROJECT,
                rusqlite::params![title, description, image_filename],
            )
            .map_err(wrap_err)?;
            Ok(conn.last_insert_rowid())
        })
        .await
    }

    async fn list_projects(&self) -> Result<Vec<Project>> {
        self.with_connection(|conn| {
            let mut stmt = conn
                .prepare(schema::SELECT_ALL_PROJECTS)
                .map_err(wrap_err)?;
            let rows = stmt.query_map([], row_to_project).map_err(wrap_err)?;

            let mut projects = Vec::new();
            for row_result in rows {
                projects.push(row_result.map_err(wrap_err)?);
            }
            Ok(projects)
        })
        .await
    }

    async fn get_project(&self, id: i64) -> Result<Option<Project>> {
        self.with_connection(move |conn| {
            let mut stmt = conn
                .prepare(schema::SELECT_PROJECT_BY_ID)
                .map_err(wrap_err)?;
            match stmt.query_row([id], row_to_project) {
                Ok(project) => Ok(Some(project)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(wrap_err(e)),
            }
        })
        .await
    }

    async fn delete_project(&self, id: i64) -> Result<()> {
        let removed = self
            .with_connection(move |conn| {
                conn.execute(schema::DELETE_PROJECT, [id]).map_err(wrap_err)
            })
            .await?;

        if removed == 0 {
            tracing::debug!(project_id = id, "Delete requested for unknown project");
        }
        Ok(())
    }
}
