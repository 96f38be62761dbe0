use async_trait::async_trait;

use crate::modules::personal_info::application::domain::entities::{
    PersonalInfo, PersonalInfoDraft,
};
use crate::shared::domain::ValidationError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdatePersonalInfoError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

/// Creates the profile if absent, otherwise replaces it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UpdatePersonalInfoUseCase: Send + Sync {
    async fn execute(&self, draft: PersonalInfoDraft)
        -> Result<PersonalInfo, UpdatePersonalInfoError>;
}
