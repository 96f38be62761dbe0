use async_trait::async_trait;

use crate::modules::technology::application::domain::entities::Technology;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTechnologiesError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GetTechnologiesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Technology>, GetTechnologiesError>;
}
