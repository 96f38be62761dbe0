use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::application::domain::entities::{Experience, ExperienceDraft};
use crate::modules::experience::application::ports::incoming::use_cases::{
    UpdateExperienceError, UpdateExperienceUseCase,
};
use crate::modules::experience::application::ports::outgoing::{
    ExperienceRepository, ExperienceRepositoryError,
};
use crate::shared::domain::Draft;

pub struct UpdateExperienceService<R>
where
    R: ExperienceRepository,
{
    repository: R,
}

impl<R> UpdateExperienceService<R>
where
    R: ExperienceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateExperienceUseCase for UpdateExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        draft: ExperienceDraft,
    ) -> Result<Experience, UpdateExperienceError> {
        let data = draft.validate()?;

        self.repository
            .replace_experience(id, data)
            .await
            .map_err(|e| match e {
                ExperienceRepositoryError::NotFound => UpdateExperienceError::NotFound,
                other => UpdateExperienceError::RepositoryError(other.to_string()),
            })
    }
}
