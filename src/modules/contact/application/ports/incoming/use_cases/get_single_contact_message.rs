use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::ContactMessage;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleContactMessageError {
    #[error("contact message not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GetSingleContactMessageUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<ContactMessage, GetSingleContactMessageError>;
}
