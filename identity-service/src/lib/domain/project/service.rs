use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::identity::ports::IdentityServicePort;
use crate::domain::identity::service::require_role;
use crate::domain::project::errors::ProjectError;
use crate::domain::project::models::CreateProjectCommand;
use crate::domain::project::models::Project;
use crate::domain::project::models::ProjectId;
use crate::domain::project::models::UpdateProjectCommand;
use crate::domain::project::ports::ProjectStore;

/// Role required for project mutations.
const ADMIN_ROLE: &str = "admin";

/// Project operations gated by the authorization guard.
///
/// Every mutating operation resolves the caller's principal from its bearer
/// token and requires the admin role before touching the store; listing is
/// open. This is the contract any project collaborator must honor.
pub struct ProjectService<PS, G>
where
    PS: ProjectStore,
    G: IdentityServicePort,
{
    store: Arc<PS>,
    guard: Arc<G>,
}

impl<PS, G> ProjectService<PS, G>
where
    PS: ProjectStore,
    G: IdentityServicePort,
{
    /// Create a new project service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - Project persistence implementation
    /// * `guard` - Identity service used to resolve and authorize principals
    pub fn new(store: Arc<PS>, guard: Arc<G>) -> Self {
        Self { store, guard }
    }

    /// List all projects. Open to unauthenticated callers.
    pub async fn list(&self) -> Result<Vec<Project>, ProjectError> {
        Ok(self.store.list_all().await?)
    }

    /// Create a project. Admin only; the resolved principal becomes owner.
    ///
    /// # Arguments
    /// * `token` - Bearer token of the caller
    /// * `command` - Project fields
    ///
    /// # Errors
    /// * `Auth(Unauthenticated)` - Token invalid, expired, or orphaned
    /// * `Auth(Forbidden)` - Caller is not an admin
    /// * `Store` - Storage operation failed
    pub async fn create(
        &self,
        token: &str,
        command: CreateProjectCommand,
    ) -> Result<Project, ProjectError> {
        let principal = self.guard.current_principal(token).await?;
        require_role(&principal, ADMIN_ROLE)?;

        let now = Utc::now();
        let project = Project {
            id: ProjectId::new(),
            name: command.name,
            description: command.description,
            owner_id: principal.id,
            created_at: now,
            updated_at: now,
        };

        Ok(self.store.insert(project).await?)
    }

    /// Update a project. Admin only.
    ///
    /// # Errors
    /// * `NotFound` - Project does not exist
    /// * `Auth(Unauthenticated)` / `Auth(Forbidden)` - Authorization failed
    /// * `Store` - Storage operation failed
    pub async fn update(
        &self,
        token: &str,
        id: &ProjectId,
        command: UpdateProjectCommand,
    ) -> Result<Project, ProjectError> {
        let principal = self.guard.current_principal(token).await?;
        require_role(&principal, ADMIN_ROLE)?;

        let mut project = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(ProjectError::NotFound(id.to_string()))?;

        if let Some(name) = command.name {
            project.name = name;
        }

        if let Some(description) = command.description {
            project.description = Some(description);
        }

        project.updated_at = Utc::now();

        Ok(self.store.update(project).await?)
    }

    /// Delete a project. Admin only.
    ///
    /// # Errors
    /// * `NotFound` - Project does not exist
    /// * `Auth(Unauthenticated)` / `Auth(Forbidden)` - Authorization failed
    /// * `Store` - Storage operation failed
    pub async fn delete(&self, token: &str, id: &ProjectId) -> Result<(), ProjectError> {
        let principal = self.guard.current_principal(token).await?;
        require_role(&principal, ADMIN_ROLE)?;

        self.store
            .find_by_id(id)
            .await?
            .ok_or(ProjectError::NotFound(id.to_string()))?;

        Ok(self.store.delete(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use auth::PasswordHasher;
    use mockall::mock;

    use super::*;
    use crate::domain::errors::StoreError;
    use crate::domain::identity::errors::AuthError;
    use crate::domain::identity::errors::RegistrationError;
    use crate::domain::identity::models::AccessToken;
    use crate::domain::identity::models::RegisterUserCommand;
    use crate::domain::identity::models::Role;
    use crate::domain::identity::models::User;
    use crate::domain::identity::models::UserId;
    use crate::domain::identity::models::Username;

    mock! {
        pub TestProjectStore {}

        #[async_trait]
        impl ProjectStore for TestProjectStore {
            async fn insert(&self, project: Project) -> Result<Project, StoreError>;
            async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, StoreError>;
            async fn list_all(&self) -> Result<Vec<Project>, StoreError>;
            async fn update(&self, project: Project) -> Result<Project, StoreError>;
            async fn delete(&self, id: &ProjectId) -> Result<(), StoreError>;
            async fn delete_by_owner(&self, owner_id: &UserId) -> Result<(), StoreError>;
        }
    }

    mock! {
        pub TestGuard {}

        #[async_trait]
        impl IdentityServicePort for TestGuard {
            async fn register(&self, command: RegisterUserCommand) -> Result<User, RegistrationError>;
            async fn authenticate(&self, username: &str, password: &str) -> Result<User, AuthError>;
            async fn login(&self, username: &str, password: &str) -> Result<AccessToken, AuthError>;
            async fn current_principal(&self, token: &str) -> Result<User, AuthError>;
        }
    }

    fn make_principal(role: &str) -> User {
        User {
            id: UserId::new(),
            username: Username::new("caller".to_string()).unwrap(),
            role: Role::new(role),
            password_hash: PasswordHasher::new().hash("Secur3!pass").unwrap(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_as_admin() {
        let mut store = MockTestProjectStore::new();
        let mut guard = MockTestGuard::new();

        let principal = make_principal("admin");
        let owner_id = principal.id;

        guard
            .expect_current_principal()
            .withf(|token| token == "token")
            .times(1)
            .returning(move |_| Ok(principal.clone()));

        store
            .expect_insert()
            .withf(move |p| p.name == "infra" && p.owner_id == owner_id)
            .times(1)
            .returning(|project| Ok(project));

        let service = ProjectService::new(Arc::new(store), Arc::new(guard));

        let command = CreateProjectCommand {
            name: "infra".to_string(),
            description: None,
        };

        let project = service.create("token", command).await.expect("create failed");
        assert_eq!(project.owner_id, owner_id);
    }

    #[tokio::test]
    async fn test_create_as_non_admin_is_forbidden() {
        let mut store = MockTestProjectStore::new();
        let mut guard = MockTestGuard::new();

        let principal = make_principal("user");
        guard
            .expect_current_principal()
            .times(1)
            .returning(move |_| Ok(principal.clone()));

        // The store is never reached on a denied request
        store.expect_insert().times(0);

        let service = ProjectService::new(Arc::new(store), Arc::new(guard));

        let command = CreateProjectCommand {
            name: "infra".to_string(),
            description: None,
        };

        let result = service.create("token", command).await;
        assert!(matches!(
            result,
            Err(ProjectError::Auth(AuthError::Forbidden))
        ));
    }

    #[tokio::test]
    async fn test_create_with_bad_token_is_unauthenticated() {
        let mut store = MockTestProjectStore::new();
        let mut guard = MockTestGuard::new();

        guard
            .expect_current_principal()
            .times(1)
            .returning(|_| Err(AuthError::Unauthenticated));

        store.expect_insert().times(0);

        let service = ProjectService::new(Arc::new(store), Arc::new(guard));

        let command = CreateProjectCommand {
            name: "infra".to_string(),
            description: None,
        };

        let result = service.create("bad-token", command).await;
        assert!(matches!(
            result,
            Err(ProjectError::Auth(AuthError::Unauthenticated))
        ));
    }

    #[tokio::test]
    async fn test_list_is_open() {
        let mut store = MockTestProjectStore::new();
        let guard = MockTestGuard::new();

        store.expect_list_all().times(1).returning(|| Ok(vec![]));

        let service = ProjectService::new(Arc::new(store), Arc::new(guard));

        let projects = service.list().await.expect("list failed");
        assert!(projects.is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_project() {
        let mut store = MockTestProjectStore::new();
        let mut guard = MockTestGuard::new();

        let principal = make_principal("admin");
        guard
            .expect_current_principal()
            .times(1)
            .returning(move |_| Ok(principal.clone()));

        store.expect_find_by_id().times(1).returning(|_| Ok(None));
        store.expect_update().times(0);

        let service = ProjectService::new(Arc::new(store), Arc::new(guard));

        let command = UpdateProjectCommand {
            name: Some("renamed".to_string()),
            description: None,
        };

        let result = service.update("token", &ProjectId::new(), command).await;
        assert!(matches!(result, Err(ProjectError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_as_admin() {
        let mut store = MockTestProjectStore::new();
        let mut guard = MockTestGuard::new();

        let principal = make_principal("admin");
        let project_id = ProjectId::new();
        let project = Project {
            id: project_id,
            name: "infra".to_string(),
            description: None,
            owner_id: principal.id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        guard
            .expect_current_principal()
            .times(1)
            .returning(move |_| Ok(principal.clone()));

        store
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(project.clone())));
        store
            .expect_delete()
            .withf(move |id| *id == project_id)
            .times(1)
            .returning(|_| Ok(()));

        let service = ProjectService::new(Arc::new(store), Arc::new(guard));

        service
            .delete("token", &project_id)
            .await
            .expect("delete failed");
    }
}
