use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::skill::application::domain::entities::{Skill, SkillDraft};
use crate::shared::domain::ValidationError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateSkillError {
    #[error("skill not found")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UpdateSkillUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, draft: SkillDraft) -> Result<Skill, UpdateSkillError>;
}
