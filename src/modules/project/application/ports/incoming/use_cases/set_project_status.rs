use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::Project;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SetProjectStatusError {
    #[error("project not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SetProjectStatusUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, status: bool) -> Result<Project, SetProjectStatusError>;
}
