use async_trait::async_trait;

use crate::modules::technology::application::domain::entities::Technology;
use crate::modules::technology::application::ports::incoming::use_cases::{
    GetTechnologiesError, GetTechnologiesUseCase,
};
use crate::modules::technology::application::ports::outgoing::TechnologyRepository;

pub struct GetTechnologiesService<R>
where
    R: TechnologyRepository,
{
    repository: R,
}

impl<R> GetTechnologiesService<R>
where
    R: TechnologyRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetTechnologiesUseCase for GetTechnologiesService<R>
where
    R: TechnologyRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Technology>, GetTechnologiesError> {
        self.repository
            .list_technologies()
            .await
            .map_err(|e| GetTechnologiesError::RepositoryError(e.to_string()))
    }
}
