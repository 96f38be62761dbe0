use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::application::ports::incoming::use_cases::{
    DeleteExperienceError, DeleteExperienceUseCase,
};
use crate::modules::experience::application::ports::outgoing::{
    ExperienceRepository, ExperienceRepositoryError,
};

pub struct DeleteExperienceService<R>
where
    R: ExperienceRepository,
{
    repository: R,
}

impl<R> DeleteExperienceService<R>
where
    R: ExperienceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteExperienceUseCase for DeleteExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteExperienceError> {
        self.repository
            .delete_experience(id)
            .await
            .map_err(|e| match e {
                ExperienceRepositoryError::NotFound => DeleteExperienceError::NotFound,
                other => DeleteExperienceError::RepositoryError(other.to_string()),
            })
    }
}
