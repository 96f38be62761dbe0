use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::skill::application::ports::incoming::use_cases::{
    DeleteSkillError, DeleteSkillUseCase,
};
use crate::modules::skill::application::ports::outgoing::{SkillRepository, SkillRepositoryError};

pub struct DeleteSkillService<R>
where
    R: SkillRepository,
{
    repository: R,
}

impl<R> DeleteSkillService<R>
where
    R: SkillRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteSkillUseCase for DeleteSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteSkillError> {
        self.repository.delete_skill(id).await.map_err(|e| match e {
            SkillRepositoryError::NotFound => DeleteSkillError::NotFound,
            other => DeleteSkillError::RepositoryError(other.to_string()),
        })
    }
}
