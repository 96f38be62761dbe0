use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::ContactMessage;
use crate::modules::contact::application::ports::incoming::use_cases::{
    GetContactMessagesError, GetContactMessagesUseCase,
};
use crate::modules::contact::application::ports::outgoing::ContactRepository;

pub struct GetContactMessagesService<R>
where
    R: ContactRepository,
{
    repository: R,
}

impl<R> GetContactMessagesService<R>
where
    R: ContactRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetContactMessagesUseCase for GetContactMessagesService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ContactMessage>, GetContactMessagesError> {
        self.repository
            .list_messages()
            .await
            .map_err(|e| GetContactMessagesError::RepositoryError(e.to_string()))
    }
}
