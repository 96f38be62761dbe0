use async_trait::async_trait;

use crate::modules::technology::application::domain::entities::{Technology, TechnologyDraft};
use crate::modules::technology::application::ports::incoming::use_cases::{
    CreateTechnologyError, CreateTechnologyUseCase,
};
use crate::modules::technology::application::ports::outgoing::{
    TechnologyRepository, TechnologyRepositoryError,
};
use crate::shared::domain::Draft;

pub struct CreateTechnologyService<R>
where
    R: TechnologyRepository,
{
    repository: R,
}

impl<R> CreateTechnologyService<R>
where
    R: TechnologyRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateTechnologyUseCase for CreateTechnologyService<R>
where
    R: TechnologyRepository + Send + Sync,
{
    async fn execute(&self, draft: TechnologyDraft) -> Result<Technology, CreateTechnologyError> {
        let data = draft.validate()?;

        self.repository
            .create_technology(data)
            .await
            .map_err(|e| match e {
                TechnologyRepositoryError::NameAlreadyExists => {
                    CreateTechnologyError::AlreadyExists
                }
                other => CreateTechnologyError::RepositoryError(other.to_string()),
            })
    }
}
