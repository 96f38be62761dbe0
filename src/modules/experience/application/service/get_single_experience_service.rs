use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::experience::application::ports::incoming::use_cases::{
    GetSingleExperienceError, GetSingleExperienceUseCase,
};
use crate::modules::experience::application::ports::outgoing::{
    ExperienceRepository, ExperienceRepositoryError,
};

pub struct GetSingleExperienceService<R>
where
    R: ExperienceRepository,
{
    repository: R,
}

impl<R> GetSingleExperienceService<R>
where
    R: ExperienceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetSingleExperienceUseCase for GetSingleExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<Experience, GetSingleExperienceError> {
        self.repository
            .find_experience(id)
            .await
            .map_err(|e| match e {
                ExperienceRepositoryError::NotFound => GetSingleExperienceError::NotFound,
                other => GetSingleExperienceError::RepositoryError(other.to_string()),
            })
    }
}
