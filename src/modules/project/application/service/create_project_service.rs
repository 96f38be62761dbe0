use async_trait::async_trait;

use crate::modules::project::application::domain::entities::{Project, ProjectDraft};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectRepository;
use crate::shared::domain::Draft;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> CreateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, draft: ProjectDraft) -> Result<Project, CreateProjectError> {
        let data = draft.validate()?;

        self.project_repository
            .create_project(data)
            .await
            .map_err(|e| CreateProjectError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::project::application::ports::outgoing::{
        MockProjectRepository, ProjectRepositoryError,
    };
    use crate::tests::support::fixtures::{project_draft, sample_project};

    // =====================================================
    // Success
    // =====================================================

    #[tokio::test]
    async fn test_execute_success() {
        let mut repo = MockProjectRepository::new();
        repo.expect_create_project()
            .withf(|data| data.title == "E-Commerce Platform" && data.technologies.len() == 4)
            .times(1)
            .returning(|data| Ok(sample_project(&data.title, data.status)));

        let service = CreateProjectService::new(repo);
        let res = service.execute(project_draft("E-Commerce Platform")).await;

        assert!(res.is_ok());
    }

    // =====================================================
    // Error mapping
    // =====================================================

    #[tokio::test]
    async fn test_execute_rejects_blank_title() {
        let repo = MockProjectRepository::new();
        let service = CreateProjectService::new(repo);

        let res = service.execute(project_draft("   ")).await;

        assert!(matches!(
            res.unwrap_err(),
            CreateProjectError::Validation(v) if v.message == "Title is required"
        ));
    }

    #[tokio::test]
    async fn test_execute_maps_serialization_error() {
        let mut repo = MockProjectRepository::new();
        repo.expect_create_project().returning(|_| {
            Err(ProjectRepositoryError::SerializationError(
                "bad json".to_string(),
            ))
        });
        let service = CreateProjectService::new(repo);

        let res = service.execute(project_draft("Dashboard")).await;

        assert!(matches!(
            res.unwrap_err(),
            CreateProjectError::RepositoryError(msg) if msg == "Serialization error: bad json"
        ));
    }
}
