use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::technology::application::domain::entities::{NewTechnology, Technology};

#[derive(Debug, Clone, thiserror::Error)]
pub enum TechnologyRepositoryError {
    #[error("Technology not found")]
    NotFound,

    /// Unique index on the technology name was violated.
    #[error("Technology name already exists")]
    NameAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TechnologyRepository: Send + Sync {
    /// Sorted by `order` then `name`, both ascending.
    async fn list_technologies(&self) -> Result<Vec<Technology>, TechnologyRepositoryError>;

    async fn find_technology(&self, id: Uuid) -> Result<Technology, TechnologyRepositoryError>;

    async fn create_technology(
        &self,
        data: NewTechnology,
    ) -> Result<Technology, TechnologyRepositoryError>;

    async fn replace_technology(
        &self,
        id: Uuid,
        data: NewTechnology,
    ) -> Result<Technology, TechnologyRepositoryError>;

    async fn delete_technology(&self, id: Uuid) -> Result<(), TechnologyRepositoryError>;
}
