use async_trait::async_trait;
use tracing::info;

use crate::modules::personal_info::application::domain::entities::{
    NewPersonalInfo, PersonalInfo,
};
use crate::modules::personal_info::application::ports::incoming::use_cases::{
    GetPersonalInfoError, GetPersonalInfoUseCase,
};
use crate::modules::personal_info::application::ports::outgoing::{
    PersonalInfoRepository, PersonalInfoRepositoryError,
};

pub struct GetPersonalInfoService<R>
where
    R: PersonalInfoRepository,
{
    repository: R,
}

impl<R> GetPersonalInfoService<R>
where
    R: PersonalInfoRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn repo_err(e: PersonalInfoRepositoryError) -> GetPersonalInfoError {
    GetPersonalInfoError::RepositoryError(e.to_string())
}

#[async_trait]
impl<R> GetPersonalInfoUseCase for GetPersonalInfoService<R>
where
    R: PersonalInfoRepository + Send + Sync,
{
    async fn execute(&self) -> Result<PersonalInfo, GetPersonalInfoError> {
        if let Some(existing) = self.repository.find_personal_info().await.map_err(repo_err)? {
            return Ok(existing);
        }

        match self
            .repository
            .insert_personal_info(NewPersonalInfo::placeholder())
            .await
        {
            Ok(created) => {
                info!("created placeholder personal info");
                Ok(created)
            }
            // A concurrent first read won the insert.
            Err(PersonalInfoRepositoryError::AlreadyExists) => self
                .repository
                .find_personal_info()
                .await
                .map_err(repo_err)?
                .ok_or_else(|| repo_err(PersonalInfoRepositoryError::NotFound)),
            Err(e) => Err(repo_err(e)),
        }
    }
}
