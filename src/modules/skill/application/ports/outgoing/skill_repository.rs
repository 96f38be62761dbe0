use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::skill::application::domain::entities::{NewSkill, Skill};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillRepositoryError {
    #[error("Skill not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    /// A stored row could not be mapped back (unknown enum text, bad JSON).
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SkillRepository: Send + Sync {
    /// Sorted by `order` ascending, newest first within the same order.
    async fn list_skills(&self) -> Result<Vec<Skill>, SkillRepositoryError>;

    async fn find_skill(&self, id: Uuid) -> Result<Skill, SkillRepositoryError>;

    async fn create_skill(&self, data: NewSkill) -> Result<Skill, SkillRepositoryError>;

    /// Full replace; `created_at` is preserved.
    async fn replace_skill(&self, id: Uuid, data: NewSkill) -> Result<Skill, SkillRepositoryError>;

    async fn delete_skill(&self, id: Uuid) -> Result<(), SkillRepositoryError>;
}
