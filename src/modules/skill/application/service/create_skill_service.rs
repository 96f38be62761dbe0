use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::{Skill, SkillDraft};
use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillError, CreateSkillUseCase,
};
use crate::modules::skill::application::ports::outgoing::SkillRepository;
use crate::shared::domain::Draft;

pub struct CreateSkillService<R>
where
    R: SkillRepository,
{
    repository: R,
}

impl<R> CreateSkillService<R>
where
    R: SkillRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateSkillUseCase for CreateSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, draft: SkillDraft) -> Result<Skill, CreateSkillError> {
        let data = draft.validate()?;

        self.repository
            .create_skill(data)
            .await
            .map_err(|e| CreateSkillError::RepositoryError(e.to_string()))
    }
}
