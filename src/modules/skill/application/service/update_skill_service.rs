use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::skill::application::domain::entities::{Skill, SkillDraft};
use crate::modules::skill::application::ports::incoming::use_cases::{
    UpdateSkillError, UpdateSkillUseCase,
};
use crate::modules::skill::application::ports::outgoing::{SkillRepository, SkillRepositoryError};
use crate::shared::domain::Draft;

pub struct UpdateSkillService<R>
where
    R: SkillRepository,
{
    repository: R,
}

impl<R> UpdateSkillService<R>
where
    R: SkillRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateSkillUseCase for UpdateSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid, draft: SkillDraft) -> Result<Skill, UpdateSkillError> {
        let data = draft.validate()?;

        self.repository
            .replace_skill(id, data)
            .await
            .map_err(|e| match e {
                SkillRepositoryError::NotFound => UpdateSkillError::NotFound,
                other => UpdateSkillError::RepositoryError(other.to_string()),
            })
    }
}
