use std::sync::Arc;

use reqwest::Method;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::client::resource::draft_body;
use crate::client::{ClientError, Resource, ResourceClient};
use crate::modules::contact::application::domain::entities::{
    ContactMessage, ContactStatus, ContactStatusUpdate,
};
use crate::modules::project::application::domain::entities::{Project, ProjectStatusUpdate};

/// What the admin screen renders for one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState<T> {
    /// `None` until the first successful load.
    pub items: Option<Vec<T>>,
    pub loading: bool,
    pub error: Option<String>,
    pub editing_item: Option<T>,
    pub dialog_open: bool,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: None,
            loading: false,
            error: None,
            editing_item: None,
            dialog_open: false,
        }
    }
}

/// Keeps a local copy of one collection and drives create, edit and
/// delete against it.
///
/// The state lock is released before every request, so overlapping calls
/// are not serialized and the last response to land wins. Requests have no
/// timeout: a call that never answers leaves `loading` set.
#[derive(Clone)]
pub struct ListController<T: Resource> {
    client: ResourceClient,
    list_path: String,
    state: Arc<Mutex<ListState<T>>>,
}

impl<T: Resource> ListController<T> {
    pub fn new(client: ResourceClient) -> Self {
        Self::with_list_path(client, T::PATH)
    }

    /// Same resource, listed through another URL (query string included).
    pub fn with_list_path(client: ResourceClient, list_path: impl Into<String>) -> Self {
        Self {
            client,
            list_path: list_path.into(),
            state: Arc::new(Mutex::new(ListState::default())),
        }
    }

    pub async fn snapshot(&self) -> ListState<T> {
        self.state.lock().await.clone()
    }

    /// Replaces `items` on success. A failure records `error` and keeps the
    /// previous items.
    pub async fn load(&self) -> Result<(), ClientError> {
        self.state.lock().await.loading = true;

        let result = self.client.fetch_list::<T>(&self.list_path).await;

        let mut state = self.state.lock().await;
        state.loading = false;
        match result {
            Ok(items) => {
                state.items = Some(items);
                state.error = None;
                Ok(())
            }
            Err(e) => {
                state.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Closes the dialog and reloads on success. On failure the dialog stays
    /// open.
    pub async fn create(&self, draft: &T::Draft) -> Result<T, ClientError> {
        let created = self
            .client
            .send::<T>(Method::POST, T::PATH, Some(draft_body(draft)?))
            .await?
            .ok_or(ClientError::MissingData)?;

        self.close_dialog().await;
        self.reload().await;
        Ok(created)
    }

    /// Full replace of `item`. On failure the dialog and the edit are kept.
    pub async fn update(&self, item: &T) -> Result<T, ClientError> {
        let body = item.update_body()?;
        let updated = self
            .client
            .send::<T>(Method::PUT, &Self::item_path(item.id()), Some(body))
            .await?
            .ok_or(ClientError::MissingData)?;

        self.close_dialog().await;
        self.reload().await;
        Ok(updated)
    }

    /// Deletes without asking; confirmation belongs to the caller.
    pub async fn remove(&self, id: Uuid) -> Result<(), ClientError> {
        self.client
            .send::<serde_json::Value>(Method::DELETE, &Self::item_path(id), None)
            .await?;

        self.reload().await;
        Ok(())
    }

    pub async fn begin_edit(&self, item: T) {
        let mut state = self.state.lock().await;
        state.editing_item = Some(item);
        state.dialog_open = true;
    }

    pub async fn begin_create(&self) {
        let mut state = self.state.lock().await;
        state.editing_item = None;
        state.dialog_open = true;
    }

    pub async fn cancel(&self) {
        self.close_dialog().await;
    }

    fn item_path(id: Uuid) -> String {
        format!("{}/{}", T::PATH, id)
    }

    async fn close_dialog(&self) {
        let mut state = self.state.lock().await;
        state.editing_item = None;
        state.dialog_open = false;
    }

    // The mutation already succeeded; a failed refetch only shows up in
    // `error`.
    async fn reload(&self) {
        let _ = self.load().await;
    }
}

impl ListController<Project> {
    /// Project list as the dashboard sees it, hidden projects included.
    pub fn admin(client: ResourceClient) -> Self {
        Self::with_list_path(client, format!("{}?accessBy=admin", Project::PATH))
    }

    /// Shows or hides a project on the public site.
    pub async fn set_status(&self, id: Uuid, status: bool) -> Result<Project, ClientError> {
        let body = serde_json::to_value(ProjectStatusUpdate { status })
            .map_err(|e| ClientError::Decode(e.to_string()))?;

        let project = self
            .client
            .send::<Project>(
                Method::PATCH,
                &format!("{}/status", Self::item_path(id)),
                Some(body),
            )
            .await?
            .ok_or(ClientError::MissingData)?;

        self.reload().await;
        Ok(project)
    }
}

impl ListController<ContactMessage> {
    pub async fn mark_read(&self, id: Uuid) -> Result<ContactMessage, ClientError> {
        let body = serde_json::to_value(ContactStatusUpdate {
            status: ContactStatus::Read,
        })
        .map_err(|e| ClientError::Decode(e.to_string()))?;

        let message = self
            .client
            .send::<ContactMessage>(Method::PUT, &Self::item_path(id), Some(body))
            .await?
            .ok_or(ClientError::MissingData)?;

        self.reload().await;
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::skill::application::domain::entities::Skill;
    use crate::tests::support::fixtures::sample_skill;
    use crate::tests::support::http::closed_port_url;

    fn offline_controller() -> ListController<Skill> {
        ListController::new(ResourceClient::new(closed_port_url()))
    }

    #[tokio::test]
    async fn starts_unloaded_with_dialog_closed() {
        let state = offline_controller().snapshot().await;

        assert_eq!(state, ListState::default());
        assert!(state.items.is_none());
    }

    #[tokio::test]
    async fn begin_edit_opens_dialog_with_item() {
        let controller = offline_controller();
        let skill = sample_skill("Rust", 1);

        controller.begin_edit(skill.clone()).await;

        let state = controller.snapshot().await;
        assert!(state.dialog_open);
        assert_eq!(state.editing_item, Some(skill));
    }

    #[tokio::test]
    async fn begin_create_clears_previous_edit() {
        let controller = offline_controller();
        controller.begin_edit(sample_skill("Rust", 1)).await;

        controller.begin_create().await;

        let state = controller.snapshot().await;
        assert!(state.dialog_open);
        assert!(state.editing_item.is_none());
    }

    #[tokio::test]
    async fn cancel_closes_dialog() {
        let controller = offline_controller();
        controller.begin_edit(sample_skill("Rust", 1)).await;

        controller.cancel().await;

        let state = controller.snapshot().await;
        assert!(!state.dialog_open);
        assert!(state.editing_item.is_none());
    }

    #[tokio::test]
    async fn failed_load_records_error_and_clears_loading() {
        let controller = offline_controller();

        let err = controller.load().await.unwrap_err();

        let state = controller.snapshot().await;
        assert!(!state.loading);
        assert_eq!(state.error, Some(err.to_string()));
        assert!(state.items.is_none());
    }

    #[tokio::test]
    async fn failed_update_keeps_the_edit_open() {
        let controller = offline_controller();
        let mut skill = sample_skill("Rust", 1);
        controller.begin_edit(skill.clone()).await;
        skill.level = 95;

        assert!(controller.update(&skill).await.is_err());

        let state = controller.snapshot().await;
        assert!(state.dialog_open);
        assert_eq!(state.editing_item.map(|s| s.id), Some(skill.id));
    }

    #[test]
    fn admin_project_list_includes_hidden_projects() {
        let controller = ListController::<Project>::admin(ResourceClient::new("http://localhost"));
        assert_eq!(controller.list_path, "/api/projects?accessBy=admin");
    }
}
