use std::sync::Arc;

use crate::modules::experience::application::ports::incoming::use_cases::{
    CreateExperienceUseCase, DeleteExperienceUseCase, GetExperiencesUseCase,
    GetSingleExperienceUseCase, UpdateExperienceUseCase,
};
use crate::modules::experience::application::ports::outgoing::ExperienceRepository;
use crate::modules::experience::application::service::{
    CreateExperienceService, DeleteExperienceService, GetExperiencesService,
    GetSingleExperienceService, UpdateExperienceService,
};

#[derive(Clone)]
pub struct ExperienceUseCases {
    pub get_list: Arc<dyn GetExperiencesUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleExperienceUseCase + Send + Sync>,
    pub create: Arc<dyn CreateExperienceUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateExperienceUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteExperienceUseCase + Send + Sync>,
}

impl ExperienceUseCases {
    pub fn from_repository<R>(repository: R) -> Self
    where
        R: ExperienceRepository + Clone + 'static,
    {
        Self {
            get_list: Arc::new(GetExperiencesService::new(repository.clone())),
            get_single: Arc::new(GetSingleExperienceService::new(repository.clone())),
            create: Arc::new(CreateExperienceService::new(repository.clone())),
            update: Arc::new(UpdateExperienceService::new(repository.clone())),
            delete: Arc::new(DeleteExperienceService::new(repository)),
        }
    }
}
