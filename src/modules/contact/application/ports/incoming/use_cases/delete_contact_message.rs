use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteContactMessageError {
    #[error("contact message not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeleteContactMessageUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteContactMessageError>;
}
