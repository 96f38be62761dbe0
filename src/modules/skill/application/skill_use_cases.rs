use std::sync::Arc;

use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillUseCase, DeleteSkillUseCase, GetSingleSkillUseCase, GetSkillsUseCase,
    UpdateSkillUseCase,
};
use crate::modules::skill::application::ports::outgoing::SkillRepository;
use crate::modules::skill::application::service::{
    CreateSkillService, DeleteSkillService, GetSingleSkillService, GetSkillsService,
    UpdateSkillService,
};

#[derive(Clone)]
pub struct SkillUseCases {
    pub get_list: Arc<dyn GetSkillsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleSkillUseCase + Send + Sync>,
    pub create: Arc<dyn CreateSkillUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateSkillUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteSkillUseCase + Send + Sync>,
}

impl SkillUseCases {
    /// Wires every skill service onto one repository.
    pub fn from_repository<R>(repository: R) -> Self
    where
        R: SkillRepository + Clone + 'static,
    {
        Self {
            get_list: Arc::new(GetSkillsService::new(repository.clone())),
            get_single: Arc::new(GetSingleSkillService::new(repository.clone())),
            create: Arc::new(CreateSkillService::new(repository.clone())),
            update: Arc::new(UpdateSkillService::new(repository.clone())),
            delete: Arc::new(DeleteSkillService::new(repository)),
        }
    }
}
