use std::sync::Arc;

use crate::modules::technology::application::ports::incoming::use_cases::{
    CreateTechnologyUseCase, DeleteTechnologyUseCase, GetSingleTechnologyUseCase,
    GetTechnologiesUseCase, UpdateTechnologyUseCase,
};
use crate::modules::technology::application::ports::outgoing::TechnologyRepository;
use crate::modules::technology::application::service::{
    CreateTechnologyService, DeleteTechnologyService, GetSingleTechnologyService,
    GetTechnologiesService, UpdateTechnologyService,
};

#[derive(Clone)]
pub struct TechnologyUseCases {
    pub get_list: Arc<dyn GetTechnologiesUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleTechnologyUseCase + Send + Sync>,
    pub create: Arc<dyn CreateTechnologyUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateTechnologyUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteTechnologyUseCase + Send + Sync>,
}

impl TechnologyUseCases {
    pub fn from_repository<R>(repository: R) -> Self
    where
        R: TechnologyRepository + Clone + 'static,
    {
        Self {
            get_list: Arc::new(GetTechnologiesService::new(repository.clone())),
            get_single: Arc::new(GetSingleTechnologyService::new(repository.clone())),
            create: Arc::new(CreateTechnologyService::new(repository.clone())),
            update: Arc::new(UpdateTechnologyService::new(repository.clone())),
            delete: Arc::new(DeleteTechnologyService::new(repository)),
        }
    }
}
