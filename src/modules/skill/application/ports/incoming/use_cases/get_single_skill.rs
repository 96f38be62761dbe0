use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::skill::application::domain::entities::Skill;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleSkillError {
    #[error("skill not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GetSingleSkillUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<Skill, GetSingleSkillError>;
}
