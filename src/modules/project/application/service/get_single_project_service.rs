use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetSingleProjectError, GetSingleProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};

pub struct GetSingleProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> GetSingleProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetSingleProjectUseCase for GetSingleProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<Project, GetSingleProjectError> {
        self.repository.find_project(id).await.map_err(|e| match e {
            ProjectRepositoryError::NotFound => GetSingleProjectError::NotFound,
            other => GetSingleProjectError::RepositoryError(other.to_string()),
        })
    }
}
