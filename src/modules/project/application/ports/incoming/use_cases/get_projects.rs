use async_trait::async_trait;

use crate::modules::project::application::domain::entities::{Project, ProjectAccess};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectsError {
    #[error("query failed: {0}")]
    QueryFailed(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    async fn execute(&self, access: ProjectAccess) -> Result<Vec<Project>, GetProjectsError>;
}
