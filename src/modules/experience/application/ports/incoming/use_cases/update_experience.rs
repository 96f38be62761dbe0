use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::application::domain::entities::{Experience, ExperienceDraft};
use crate::shared::domain::ValidationError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateExperienceError {
    #[error("experience not found")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UpdateExperienceUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        draft: ExperienceDraft,
    ) -> Result<Experience, UpdateExperienceError>;
}
