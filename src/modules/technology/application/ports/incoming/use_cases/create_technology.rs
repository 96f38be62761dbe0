use async_trait::async_trait;

use crate::modules::technology::application::domain::entities::{Technology, TechnologyDraft};
use crate::shared::domain::ValidationError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTechnologyError {
    #[error("technology already exists")]
    AlreadyExists,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CreateTechnologyUseCase: Send + Sync {
    async fn execute(&self, draft: TechnologyDraft) -> Result<Technology, CreateTechnologyError>;
}
