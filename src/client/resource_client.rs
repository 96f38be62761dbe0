use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::error::{RemoteError, GENERIC_FAILURE};
use crate::client::resource::draft_body;
use crate::client::{ClientError, Resource};
use crate::modules::contact::application::domain::entities::{ContactDraft, ContactMessage};
use crate::shared::domain::Draft;

/// Response envelope shared by every endpoint.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    data: Option<T>,
    message: Option<String>,
    error: Option<RemoteError>,
}

/// One HTTP call per operation. No caching, deduplication or retries.
#[derive(Debug, Clone)]
pub struct ResourceClient {
    http: Client,
    base_url: String,
}

impl ResourceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(Client::new(), base_url)
    }

    pub fn with_http_client(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_list<T>(&self, path: &str) -> Result<Vec<T>, ClientError>
    where
        T: DeserializeOwned,
    {
        self.fetch_one(path).await
    }

    pub async fn fetch_one<T>(&self, path: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        self.send(Method::GET, path, None)
            .await?
            .ok_or(ClientError::MissingData)
    }

    /// Write call. `body` is validated before it is serialized; `None`
    /// sends no body (deletes). Answers the envelope `data`, if any.
    pub async fn mutate<T, D>(
        &self,
        path: &str,
        method: Method,
        body: Option<&D>,
    ) -> Result<Option<T>, ClientError>
    where
        T: DeserializeOwned,
        D: Draft + Serialize,
    {
        let payload = body.map(draft_body).transpose()?;
        self.send(method, path, payload).await
    }

    /// Public contact form.
    pub async fn submit_contact_message(
        &self,
        draft: &ContactDraft,
    ) -> Result<ContactMessage, ClientError> {
        self.mutate(ContactMessage::PATH, Method::POST, Some(draft))
            .await?
            .ok_or(ClientError::MissingData)
    }

    /// Raw call with an already-built JSON body.
    pub async fn send<T>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Option<T>, ClientError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "api request");

        let mut request = self.http.request(method.clone(), &url);
        if let Some(body) = body {
            let bytes = serde_json::to_vec(&body).map_err(|e| ClientError::Decode(e.to_string()))?;
            request = request.header(CONTENT_TYPE, "application/json").body(bytes);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        debug!(%method, %url, status, "api response");
        decode_envelope(status, &bytes)
    }
}

fn decode_envelope<T>(status: u16, bytes: &[u8]) -> Result<Option<T>, ClientError>
where
    T: DeserializeOwned,
{
    let ok = (200..300).contains(&status);

    match serde_json::from_slice::<Envelope<T>>(bytes) {
        Ok(envelope) if ok && envelope.success => Ok(envelope.data),
        Ok(envelope) => {
            let (code, message) = match envelope.error {
                Some(error) => error.into_parts(),
                None => (
                    None,
                    envelope
                        .message
                        .unwrap_or_else(|| GENERIC_FAILURE.to_string()),
                ),
            };
            Err(ClientError::Remote {
                status,
                code,
                message,
            })
        }
        Err(e) if ok => Err(ClientError::Decode(e.to_string())),
        Err(_) => Err(ClientError::Remote {
            status,
            code: None,
            message: GENERIC_FAILURE.to_string(),
        }),
    }
}
