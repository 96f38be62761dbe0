use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::application::domain::entities::{Experience, NewExperience};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExperienceRepositoryError {
    #[error("Experience not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    /// Sorted by `order` ascending, most recent start date first within an order.
    async fn list_experiences(&self) -> Result<Vec<Experience>, ExperienceRepositoryError>;

    async fn find_experience(&self, id: Uuid) -> Result<Experience, ExperienceRepositoryError>;

    async fn create_experience(
        &self,
        data: NewExperience,
    ) -> Result<Experience, ExperienceRepositoryError>;

    async fn replace_experience(
        &self,
        id: Uuid,
        data: NewExperience,
    ) -> Result<Experience, ExperienceRepositoryError>;

    async fn delete_experience(&self, id: Uuid) -> Result<(), ExperienceRepositoryError>;
}
