use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::{ContactMessage, ContactStatus};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateContactStatusError {
    #[error("contact message not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UpdateContactStatusUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        status: ContactStatus,
    ) -> Result<ContactMessage, UpdateContactStatusError>;
}
