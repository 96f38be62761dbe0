use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::{Experience, ExperienceDraft};
use crate::modules::experience::application::ports::incoming::use_cases::{
    CreateExperienceError, CreateExperienceUseCase,
};
use crate::modules::experience::application::ports::outgoing::ExperienceRepository;
use crate::shared::domain::Draft;

pub struct CreateExperienceService<R>
where
    R: ExperienceRepository,
{
    repository: R,
}

impl<R> CreateExperienceService<R>
where
    R: ExperienceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateExperienceUseCase for CreateExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(&self, draft: ExperienceDraft) -> Result<Experience, CreateExperienceError> {
        let data = draft.validate()?;

        self.repository
            .create_experience(data)
            .await
            .map_err(|e| CreateExperienceError::RepositoryError(e.to_string()))
    }
}
