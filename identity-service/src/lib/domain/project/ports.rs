use async_trait::async_trait;

use crate::domain::errors::StoreError;
use crate::domain::identity::models::UserId;
use crate::domain::project::models::Project;
use crate::domain::project::models::ProjectId;

/// Persistence operations for the project aggregate.
#[async_trait]
pub trait ProjectStore: Send + Sync + 'static {
    /// Persist a new project.
    ///
    /// # Errors
    /// * `Backend` - Storage operation failed
    async fn insert(&self, project: Project) -> Result<Project, StoreError>;

    /// Retrieve a project by identifier.
    ///
    /// # Returns
    /// Optional project entity (None if not found)
    ///
    /// # Errors
    /// * `Backend` - Storage operation failed
    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, StoreError>;

    /// Retrieve all projects.
    ///
    /// # Errors
    /// * `Backend` - Storage operation failed
    async fn list_all(&self) -> Result<Vec<Project>, StoreError>;

    /// Update an existing project.
    ///
    /// # Errors
    /// * `NotFound` - Project does not exist
    /// * `Backend` - Storage operation failed
    async fn update(&self, project: Project) -> Result<Project, StoreError>;

    /// Remove a project.
    ///
    /// # Errors
    /// * `NotFound` - Project does not exist
    /// * `Backend` - Storage operation failed
    async fn delete(&self, id: &ProjectId) -> Result<(), StoreError>;

    /// Remove every project owned by a user.
    ///
    /// Fan-out hook for cascading user deletion: the store performs the
    /// delete explicitly and transactionally, it is never an implicit
    /// object-graph side effect.
    ///
    /// # Errors
    /// * `Backend` - Storage operation failed
    async fn delete_by_owner(&self, owner_id: &UserId) -> Result<(), StoreError>;
}
