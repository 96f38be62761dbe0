use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::application::domain::entities::Experience;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleExperienceError {
    #[error("experience not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GetSingleExperienceUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<Experience, GetSingleExperienceError>;
}
