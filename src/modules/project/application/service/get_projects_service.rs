use async_trait::async_trait;

use crate::modules::project::application::domain::entities::{Project, ProjectAccess};
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectsError, GetProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectRepository;

pub struct GetProjectsService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> GetProjectsService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetProjectsUseCase for GetProjectsService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, access: ProjectAccess) -> Result<Vec<Project>, GetProjectsError> {
        self.repository
            .list_projects(access.only_active())
            .await
            .map_err(|e| GetProjectsError::QueryFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::project::application::ports::outgoing::{
        MockProjectRepository, ProjectRepositoryError,
    };
    use crate::tests::support::fixtures::sample_project;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn public_listing_asks_for_active_only() {
        let mut repo = MockProjectRepository::new();
        repo.expect_list_projects()
            .with(eq(true))
            .times(1)
            .returning(|_| Ok(vec![sample_project("Task Management App", true)]));

        let list = GetProjectsService::new(repo)
            .execute(ProjectAccess::User)
            .await
            .unwrap();

        assert_eq!(list.len(), 1);
    }

    #[tokio::test]
    async fn admin_listing_includes_hidden() {
        let mut repo = MockProjectRepository::new();
        repo.expect_list_projects()
            .with(eq(false))
            .times(1)
            .returning(|_| {
                Ok(vec![
                    sample_project("Visible", true),
                    sample_project("Hidden", false),
                ])
            });

        let list = GetProjectsService::new(repo)
            .execute(ProjectAccess::Admin)
            .await
            .unwrap();

        assert_eq!(list.len(), 2);
    }

    #[tokio::test]
    async fn maps_repository_error() {
        let mut repo = MockProjectRepository::new();
        repo.expect_list_projects()
            .returning(|_| Err(ProjectRepositoryError::DatabaseError("down".to_string())));

        let err = GetProjectsService::new(repo)
            .execute(ProjectAccess::User)
            .await
            .unwrap_err();

        assert!(matches!(err, GetProjectsError::QueryFailed(_)));
    }
}
