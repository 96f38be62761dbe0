use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    SetProjectStatusError, SetProjectStatusUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};

pub struct SetProjectStatusService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> SetProjectStatusService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> SetProjectStatusUseCase for SetProjectStatusService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid, status: bool) -> Result<Project, SetProjectStatusError> {
        self.project_repository
            .set_project_status(id, status)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::NotFound => SetProjectStatusError::NotFound,
                other => SetProjectStatusError::RepositoryError(other.to_string()),
            })
    }
}
