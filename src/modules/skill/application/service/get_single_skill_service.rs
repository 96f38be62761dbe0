use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::incoming::use_cases::{
    GetSingleSkillError, GetSingleSkillUseCase,
};
use crate::modules::skill::application::ports::outgoing::{SkillRepository, SkillRepositoryError};

pub struct GetSingleSkillService<R>
where
    R: SkillRepository,
{
    repository: R,
}

impl<R> GetSingleSkillService<R>
where
    R: SkillRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetSingleSkillUseCase for GetSingleSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<Skill, GetSingleSkillError> {
        self.repository.find_skill(id).await.map_err(|e| match e {
            SkillRepositoryError::NotFound => GetSingleSkillError::NotFound,
            other => GetSingleSkillError::RepositoryError(other.to_string()),
        })
    }
}
