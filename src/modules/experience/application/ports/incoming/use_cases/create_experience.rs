use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::{Experience, ExperienceDraft};
use crate::shared::domain::ValidationError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateExperienceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CreateExperienceUseCase: Send + Sync {
    async fn execute(&self, draft: ExperienceDraft) -> Result<Experience, CreateExperienceError>;
}
