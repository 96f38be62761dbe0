use std::sync::Arc;

use reqwest::Method;
use tokio::sync::Mutex;

use crate::client::{ClientError, ResourceClient};
use crate::modules::personal_info::application::domain::entities::{
    PersonalInfo, PersonalInfoDraft,
};

pub const PERSONAL_INFO_PATH: &str = "/api/personal-info";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalInfoState {
    pub info: Option<PersonalInfo>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Singleton counterpart of [`ListController`](crate::client::ListController).
#[derive(Clone)]
pub struct PersonalInfoController {
    client: ResourceClient,
    state: Arc<Mutex<PersonalInfoState>>,
}

impl PersonalInfoController {
    pub fn new(client: ResourceClient) -> Self {
        Self {
            client,
            state: Arc::new(Mutex::new(PersonalInfoState::default())),
        }
    }

    pub async fn snapshot(&self) -> PersonalInfoState {
        self.state.lock().await.clone()
    }

    /// The server creates the default profile on first read.
    pub async fn load(&self) -> Result<(), ClientError> {
        self.state.lock().await.loading = true;

        let result = self
            .client
            .fetch_one::<PersonalInfo>(PERSONAL_INFO_PATH)
            .await;

        let mut state = self.state.lock().await;
        state.loading = false;
        match result {
            Ok(info) => {
                state.info = Some(info);
                state.error = None;
                Ok(())
            }
            Err(e) => {
                state.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Upsert. The stored profile is replaced only when the server accepts it.
    pub async fn save(&self, draft: &PersonalInfoDraft) -> Result<PersonalInfo, ClientError> {
        let saved = self
            .client
            .mutate::<PersonalInfo, _>(PERSONAL_INFO_PATH, Method::PUT, Some(draft))
            .await?
            .ok_or(ClientError::MissingData)?;

        let mut state = self.state.lock().await;
        state.info = Some(saved.clone());
        state.error = None;
        Ok(saved)
    }
}
