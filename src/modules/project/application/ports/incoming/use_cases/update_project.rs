use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{Project, ProjectDraft};
use crate::shared::domain::ValidationError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProjectError {
    #[error("project not found")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

/// Full-document replace.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, draft: ProjectDraft) -> Result<Project, UpdateProjectError>;
}
