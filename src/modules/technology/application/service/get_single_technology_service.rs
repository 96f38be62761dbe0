use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::technology::application::domain::entities::Technology;
use crate::modules::technology::application::ports::incoming::use_cases::{
    GetSingleTechnologyError, GetSingleTechnologyUseCase,
};
use crate::modules::technology::application::ports::outgoing::{
    TechnologyRepository, TechnologyRepositoryError,
};

pub struct GetSingleTechnologyService<R>
where
    R: TechnologyRepository,
{
    repository: R,
}

impl<R> GetSingleTechnologyService<R>
where
    R: TechnologyRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetSingleTechnologyUseCase for GetSingleTechnologyService<R>
where
    R: TechnologyRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<Technology, GetSingleTechnologyError> {
        self.repository
            .find_technology(id)
            .await
            .map_err(|e| match e {
                TechnologyRepositoryError::NotFound => GetSingleTechnologyError::NotFound,
                other => GetSingleTechnologyError::RepositoryError(other.to_string()),
            })
    }
}
