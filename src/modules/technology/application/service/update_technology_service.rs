use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::technology::application::domain::entities::{Technology, TechnologyDraft};
use crate::modules::technology::application::ports::incoming::use_cases::{
    UpdateTechnologyError, UpdateTechnologyUseCase,
};
use crate::modules::technology::application::ports::outgoing::{
    TechnologyRepository, TechnologyRepositoryError,
};
use crate::shared::domain::Draft;

pub struct UpdateTechnologyService<R>
where
    R: TechnologyRepository,
{
    repository: R,
}

impl<R> UpdateTechnologyService<R>
where
    R: TechnologyRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateTechnologyUseCase for UpdateTechnologyService<R>
where
    R: TechnologyRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        draft: TechnologyDraft,
    ) -> Result<Technology, UpdateTechnologyError> {
        let data = draft.validate()?;

        self.repository
            .replace_technology(id, data)
            .await
            .map_err(|e| match e {
                TechnologyRepositoryError::NotFound => UpdateTechnologyError::NotFound,
                TechnologyRepositoryError::NameAlreadyExists => {
                    UpdateTechnologyError::AlreadyExists
                }
                other => UpdateTechnologyError::RepositoryError(other.to_string()),
            })
    }
}
