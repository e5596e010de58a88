use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::errors::StoreError;
use crate::domain::identity::models::UserId;
use crate::domain::project::models::Project;
use crate::domain::project::models::ProjectId;
use crate::domain::project::ports::ProjectStore;

/// In-memory project store keyed by project id.
pub struct InMemoryProjectStore {
    projects: RwLock<HashMap<Uuid, Project>>,
}

impl InMemoryProjectStore {
    pub fn new() -> Self {
        Self {
            projects: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn insert(&self, project: Project) -> Result<Project, StoreError> {
        let mut projects = self.projects.write().await;
        projects.insert(project.id.0, project.clone());
        Ok(project)
    }

    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, StoreError> {
        let projects = self.projects.read().await;
        Ok(projects.get(&id.0).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Project>, StoreError> {
        let projects = self.projects.read().await;
        Ok(projects.values().cloned().collect())
    }

    async fn update(&self, project: Project) -> Result<Project, StoreError> {
        let mut projects = self.projects.write().await;

        if !projects.contains_key(&project.id.0) {
            return Err(StoreError::NotFound(project.id.to_string()));
        }

        projects.insert(project.id.0, project.clone());
        Ok(project)
    }

    async fn delete(&self, id: &ProjectId) -> Result<(), StoreError> {
        let mut projects = self.projects.write().await;

        projects
            .remove(&id.0)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id.to_string()))
    }

    async fn delete_by_owner(&self, owner_id: &UserId) -> Result<(), StoreError> {
        let mut projects = self.projects.write().await;
        projects.retain(|_, project| project.owner_id != *owner_id);
        Ok(())
    }
}
