// src/modules/project/application/ports/outgoing/project_repository.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{NewProject, Project};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Ordered by `top_priority` desc then `created_at` desc.
    /// `only_active` drops projects whose status is false.
    async fn list_projects(&self, only_active: bool)
        -> Result<Vec<Project>, ProjectRepositoryError>;

    /// Not filtered by status.
    async fn find_project(&self, id: Uuid) -> Result<Project, ProjectRepositoryError>;

    async fn create_project(&self, data: NewProject) -> Result<Project, ProjectRepositoryError>;

    async fn replace_project(
        &self,
        id: Uuid,
        data: NewProject,
    ) -> Result<Project, ProjectRepositoryError>;

    /// Touches only the visibility flag.
    async fn set_project_status(
        &self,
        id: Uuid,
        status: bool,
    ) -> Result<Project, ProjectRepositoryError>;

    async fn delete_project(&self, id: Uuid) -> Result<(), ProjectRepositoryError>;
}
