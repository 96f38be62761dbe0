use async_trait::async_trait;

use crate::modules::personal_info::application::domain::entities::PersonalInfo;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPersonalInfoError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

/// Returns the stored profile, creating the placeholder one if none exists.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GetPersonalInfoUseCase: Send + Sync {
    async fn execute(&self) -> Result<PersonalInfo, GetPersonalInfoError>;
}
