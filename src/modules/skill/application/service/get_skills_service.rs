use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::incoming::use_cases::{
    GetSkillsError, GetSkillsUseCase,
};
use crate::modules::skill::application::ports::outgoing::SkillRepository;

pub struct GetSkillsService<R>
where
    R: SkillRepository,
{
    repository: R,
}

impl<R> GetSkillsService<R>
where
    R: SkillRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetSkillsUseCase for GetSkillsService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Skill>, GetSkillsError> {
        self.repository
            .list_skills()
            .await
            .map_err(|e| GetSkillsError::RepositoryError(e.to_string()))
    }
}
