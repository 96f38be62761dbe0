use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::technology::application::domain::entities::Technology;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleTechnologyError {
    #[error("technology not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GetSingleTechnologyUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<Technology, GetSingleTechnologyError>;
}
