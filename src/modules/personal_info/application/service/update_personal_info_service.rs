use async_trait::async_trait;

use crate::modules::personal_info::application::domain::entities::{
    NewPersonalInfo, PersonalInfo, PersonalInfoDraft,
};
use crate::modules::personal_info::application::ports::incoming::use_cases::{
    UpdatePersonalInfoError, UpdatePersonalInfoUseCase,
};
use crate::modules::personal_info::application::ports::outgoing::{
    PersonalInfoRepository, PersonalInfoRepositoryError,
};
use crate::shared::domain::Draft;

pub struct UpdatePersonalInfoService<R>
where
    R: PersonalInfoRepository,
{
    repository: R,
}

impl<R> UpdatePersonalInfoService<R>
where
    R: PersonalInfoRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    async fn replace_existing(
        &self,
        data: NewPersonalInfo,
    ) -> Result<PersonalInfo, PersonalInfoRepositoryError> {
        let existing = self
            .repository
            .find_personal_info()
            .await?
            .ok_or(PersonalInfoRepositoryError::NotFound)?;

        self.repository
            .replace_personal_info(existing.id, data)
            .await
    }
}

#[async_trait]
impl<R> UpdatePersonalInfoUseCase for UpdatePersonalInfoService<R>
where
    R: PersonalInfoRepository + Send + Sync,
{
    async fn execute(
        &self,
        draft: PersonalInfoDraft,
    ) -> Result<PersonalInfo, UpdatePersonalInfoError> {
        let data = draft.validate()?;

        let current = self
            .repository
            .find_personal_info()
            .await
            .map_err(|e| UpdatePersonalInfoError::RepositoryError(e.to_string()))?;

        let result = match current {
            Some(existing) => {
                self.repository
                    .replace_personal_info(existing.id, data)
                    .await
            }
            None => match self.repository.insert_personal_info(data.clone()).await {
                Err(PersonalInfoRepositoryError::AlreadyExists) => {
                    self.replace_existing(data).await
                }
                other => other,
            },
        };

        result.map_err(|e| UpdatePersonalInfoError::RepositoryError(e.to_string()))
    }
}
