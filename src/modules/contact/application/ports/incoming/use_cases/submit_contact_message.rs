use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::{ContactDraft, ContactMessage};
use crate::shared::domain::ValidationError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitContactMessageError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitContactMessageUseCase: Send + Sync {
    async fn execute(&self, draft: ContactDraft)
        -> Result<ContactMessage, SubmitContactMessageError>;
}
