use std::sync::Arc;

use crate::modules::contact::application::ports::incoming::use_cases::{
    DeleteContactMessageUseCase, GetContactMessagesUseCase, GetSingleContactMessageUseCase,
    SubmitContactMessageUseCase, UpdateContactStatusUseCase,
};
use crate::modules::contact::application::ports::outgoing::ContactRepository;
use crate::modules::contact::application::service::{
    DeleteContactMessageService, GetContactMessagesService, GetSingleContactMessageService,
    SubmitContactMessageService, UpdateContactStatusService,
};

#[derive(Clone)]
pub struct ContactUseCases {
    pub get_list: Arc<dyn GetContactMessagesUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleContactMessageUseCase + Send + Sync>,
    pub submit: Arc<dyn SubmitContactMessageUseCase + Send + Sync>,
    pub update_status: Arc<dyn UpdateContactStatusUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteContactMessageUseCase + Send + Sync>,
}

impl ContactUseCases {
    pub fn from_repository<R>(repository: R) -> Self
    where
        R: ContactRepository + Clone + 'static,
    {
        Self {
            get_list: Arc::new(GetContactMessagesService::new(repository.clone())),
            get_single: Arc::new(GetSingleContactMessageService::new(repository.clone())),
            submit: Arc::new(SubmitContactMessageService::new(repository.clone())),
            update_status: Arc::new(UpdateContactStatusService::new(repository.clone())),
            delete: Arc::new(DeleteContactMessageService::new(repository)),
        }
    }
}
