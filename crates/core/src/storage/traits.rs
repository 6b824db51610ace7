use async_trait::async_trait;

use crate::project::{NewProject, Project};

use super::Result;

/// Repository for portfolio project operations.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Creates the backing table if it does not exist yet. Safe to call repeatedly.
    async fn initialize(&self) -> Result<()>;

    /// Persists a new project and returns its store-assigned id.
    ///
    /// No validation happens here; callers validate submissions first.
    async fn create_project(&self, project: &NewProject) -> Result<i64>;

    /// Lists all projects, newest (highest id) first.
    async fn list_projects(&self) -> Result<Vec<Project>>;

    /// Gets a project by its id. Unknown and negative ids yield `None`.
    async fn get_project(&self, id: i64) -> Result<Option<Project>>;

    /// Deletes a project by its id. Deleting an unknown id is a no-op.
    async fn delete_project(&self, id: i64) -> Result<()>;
}
