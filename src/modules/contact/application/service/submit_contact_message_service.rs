use async_trait::async_trait;
use tracing::info;

use crate::modules::contact::application::domain::entities::{ContactDraft, ContactMessage};
use crate::modules::contact::application::ports::incoming::use_cases::{
    SubmitContactMessageError, SubmitContactMessageUseCase,
};
use crate::modules::contact::application::ports::outgoing::ContactRepository;
use crate::shared::domain::Draft;

pub struct SubmitContactMessageService<R>
where
    R: ContactRepository,
{
    repository: R,
}

impl<R> SubmitContactMessageService<R>
where
    R: ContactRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SubmitContactMessageUseCase for SubmitContactMessageService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(
        &self,
        draft: ContactDraft,
    ) -> Result<ContactMessage, SubmitContactMessageError> {
        let data = draft.validate()?;

        let message = self
            .repository
            .create_message(data)
            .await
            .map_err(|e| SubmitContactMessageError::RepositoryError(e.to_string()))?;

        info!(message_id = %message.id, "contact message received");

        Ok(message)
    }
}
