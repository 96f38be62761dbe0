use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::technology::application::ports::incoming::use_cases::{
    DeleteTechnologyError, DeleteTechnologyUseCase,
};
use crate::modules::technology::application::ports::outgoing::{
    TechnologyRepository, TechnologyRepositoryError,
};

pub struct DeleteTechnologyService<R>
where
    R: TechnologyRepository,
{
    repository: R,
}

impl<R> DeleteTechnologyService<R>
where
    R: TechnologyRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteTechnologyUseCase for DeleteTechnologyService<R>
where
    R: TechnologyRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteTechnologyError> {
        self.repository
            .delete_technology(id)
            .await
            .map_err(|e| match e {
                TechnologyRepositoryError::NotFound => DeleteTechnologyError::NotFound,
                other => DeleteTechnologyError::RepositoryError(other.to_string()),
            })
    }
}
