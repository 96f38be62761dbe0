use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::technology::application::domain::entities::{Technology, TechnologyDraft};
use crate::shared::domain::ValidationError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateTechnologyError {
    #[error("technology not found")]
    NotFound,

    /// Renaming onto a name another technology already uses.
    #[error("technology already exists")]
    AlreadyExists,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UpdateTechnologyUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        draft: TechnologyDraft,
    ) -> Result<Technology, UpdateTechnologyError>;
}
