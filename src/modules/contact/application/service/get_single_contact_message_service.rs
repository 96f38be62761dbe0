use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::ContactMessage;
use crate::modules::contact::application::ports::incoming::use_cases::{
    GetSingleContactMessageError, GetSingleContactMessageUseCase,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError,
};

pub struct GetSingleContactMessageService<R>
where
    R: ContactRepository,
{
    repository: R,
}

impl<R> GetSingleContactMessageService<R>
where
    R: ContactRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetSingleContactMessageUseCase for GetSingleContactMessageService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<ContactMessage, GetSingleContactMessageError> {
        self.repository.find_message(id).await.map_err(|e| match e {
            ContactRepositoryError::NotFound => GetSingleContactMessageError::NotFound,
            other => GetSingleContactMessageError::RepositoryError(other.to_string()),
        })
    }
}
