use std::sync::Arc;

use crate::modules::personal_info::application::ports::incoming::use_cases::{
    GetPersonalInfoUseCase, UpdatePersonalInfoUseCase,
};
use crate::modules::personal_info::application::ports::outgoing::PersonalInfoRepository;
use crate::modules::personal_info::application::service::{
    GetPersonalInfoService, UpdatePersonalInfoService,
};

#[derive(Clone)]
pub struct PersonalInfoUseCases {
    pub get: Arc<dyn GetPersonalInfoUseCase + Send + Sync>,
    pub update: Arc<dyn UpdatePersonalInfoUseCase + Send + Sync>,
}

impl PersonalInfoUseCases {
    pub fn from_repository<R>(repository: R) -> Self
    where
        R: PersonalInfoRepository + Clone + 'static,
    {
        Self {
            get: Arc::new(GetPersonalInfoService::new(repository.clone())),
            update: Arc::new(UpdatePersonalInfoService::new(repository)),
        }
    }
}
