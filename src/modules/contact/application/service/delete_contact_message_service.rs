use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::ports::incoming::use_cases::{
    DeleteContactMessageError, DeleteContactMessageUseCase,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError,
};

pub struct DeleteContactMessageService<R>
where
    R: ContactRepository,
{
    repository: R,
}

impl<R> DeleteContactMessageService<R>
where
    R: ContactRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteContactMessageUseCase for DeleteContactMessageService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteContactMessageError> {
        self.repository.delete_message(id).await.map_err(|e| match e {
            ContactRepositoryError::NotFound => DeleteContactMessageError::NotFound,
            other => DeleteContactMessageError::RepositoryError(other.to_string()),
        })
    }
}
