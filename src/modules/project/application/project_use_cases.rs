use std::sync::Arc;

use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, GetProjectsUseCase, GetSingleProjectUseCase,
    SetProjectStatusUseCase, UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectRepository;
use crate::modules::project::application::service::{
    CreateProjectService, DeleteProjectService, GetProjectsService, GetSingleProjectService,
    SetProjectStatusService, UpdateProjectService,
};

#[derive(Clone)]
pub struct ProjectUseCases {
    pub get_list: Arc<dyn GetProjectsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleProjectUseCase + Send + Sync>,
    pub create: Arc<dyn CreateProjectUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateProjectUseCase + Send + Sync>,
    pub set_status: Arc<dyn SetProjectStatusUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteProjectUseCase + Send + Sync>,
}

impl ProjectUseCases {
    pub fn from_repository<R>(repository: R) -> Self
    where
        R: ProjectRepository + Clone + 'static,
    {
        Self {
            get_list: Arc::new(GetProjectsService::new(repository.clone())),
            get_single: Arc::new(GetSingleProjectService::new(repository.clone())),
            create: Arc::new(CreateProjectService::new(repository.clone())),
            update: Arc::new(UpdateProjectService::new(repository.clone())),
            set_status: Arc::new(SetProjectStatusService::new(repository.clone())),
            delete: Arc::new(DeleteProjectService::new(repository)),
        }
    }
}
