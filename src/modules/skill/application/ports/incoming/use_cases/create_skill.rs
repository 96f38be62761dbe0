use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::{Skill, SkillDraft};
use crate::shared::domain::ValidationError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateSkillError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CreateSkillUseCase: Send + Sync {
    async fn execute(&self, draft: SkillDraft) -> Result<Skill, CreateSkillError>;
}
