use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::{
    ContactMessage, ContactStatus, NewContactMessage,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactRepositoryError {
    #[error("Contact message not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Newest first.
    async fn list_messages(&self) -> Result<Vec<ContactMessage>, ContactRepositoryError>;

    async fn find_message(&self, id: Uuid) -> Result<ContactMessage, ContactRepositoryError>;

    /// Stored with status `unread`.
    async fn create_message(
        &self,
        data: NewContactMessage,
    ) -> Result<ContactMessage, ContactRepositoryError>;

    async fn set_message_status(
        &self,
        id: Uuid,
        status: ContactStatus,
    ) -> Result<ContactMessage, ContactRepositoryError>;

    async fn delete_message(&self, id: Uuid) -> Result<(), ContactRepositoryError>;
}
