use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::personal_info::application::domain::entities::{
    NewPersonalInfo, PersonalInfo,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum PersonalInfoRepositoryError {
    #[error("Personal info not found")]
    NotFound,

    /// Another writer inserted the singleton first.
    #[error("Personal info already exists")]
    AlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonalInfoRepository: Send + Sync {
    async fn find_personal_info(&self) -> Result<Option<PersonalInfo>, PersonalInfoRepositoryError>;

    /// Fails with `AlreadyExists` when a record is already stored.
    async fn insert_personal_info(
        &self,
        data: NewPersonalInfo,
    ) -> Result<PersonalInfo, PersonalInfoRepositoryError>;

    async fn replace_personal_info(
        &self,
        id: Uuid,
        data: NewPersonalInfo,
    ) -> Result<PersonalInfo, PersonalInfoRepositoryError>;
}
