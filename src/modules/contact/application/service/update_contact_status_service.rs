use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::{ContactMessage, ContactStatus};
use crate::modules::contact::application::ports::incoming::use_cases::{
    UpdateContactStatusError, UpdateContactStatusUseCase,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError,
};

pub struct UpdateContactStatusService<R>
where
    R: ContactRepository,
{
    repository: R,
}

impl<R> UpdateContactStatusService<R>
where
    R: ContactRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateContactStatusUseCase for UpdateContactStatusService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        status: ContactStatus,
    ) -> Result<ContactMessage, UpdateContactStatusError> {
        self.repository
            .set_message_status(id, status)
            .await
            .map_err(|e| match e {
                ContactRepositoryError::NotFound => UpdateContactStatusError::NotFound,
                other => UpdateContactStatusError::RepositoryError(other.to_string()),
            })
    }
}
