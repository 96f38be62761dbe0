use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::shared::domain::{
    checked_text, normalize_list, optional_text, Draft, ValidationError,
};

pub const DEFAULT_PROJECT_IMAGE: &str = "/placeholder.svg?height=300&width=500";
pub const DEFAULT_PROJECT_URL: &str = "#";

const MAX_TITLE_LEN: usize = 150;
const MAX_DESCRIPTION_LEN: usize = 2000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image: String,
    /// Technology names, matched against the technology collection by name.
    pub technologies: Vec<String>,
    pub live_url: String,
    pub github_url: String,
    pub featured: bool,
    /// Public visibility. Hidden projects are only listed for the admin.
    pub status: bool,
    /// Higher values are listed first.
    pub top_priority: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    #[serde(default = "default_image")]
    pub image: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default = "default_url")]
    pub live_url: String,
    #[serde(default = "default_url")]
    pub github_url: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_status")]
    pub status: bool,
    #[serde(default)]
    pub top_priority: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub live_url: String,
    pub github_url: String,
    pub featured: bool,
    pub status: bool,
    pub top_priority: i32,
}

impl Draft for ProjectDraft {
    type Valid = NewProject;

    fn validate(&self) -> Result<NewProject, ValidationError> {
        Ok(NewProject {
            title: checked_text("Title", &self.title, MAX_TITLE_LEN)?,
            description: checked_text("Description", &self.description, MAX_DESCRIPTION_LEN)?,
            image: optional_text(Some(self.image.clone()))
                .unwrap_or_else(default_image),
            technologies: normalize_list(self.technologies.clone()),
            live_url: optional_text(Some(self.live_url.clone())).unwrap_or_else(default_url),
            github_url: optional_text(Some(self.github_url.clone())).unwrap_or_else(default_url),
            featured: self.featured,
            status: self.status,
            top_priority: self.top_priority,
        })
    }
}

impl From<&Project> for ProjectDraft {
    fn from(p: &Project) -> Self {
        Self {
            title: p.title.clone(),
            description: p.description.clone(),
            image: p.image.clone(),
            technologies: p.technologies.clone(),
            live_url: p.live_url.clone(),
            github_url: p.github_url.clone(),
            featured: p.featured,
            status: p.status,
            top_priority: p.top_priority,
        }
    }
}

/// Who is asking for the project list. The public site only sees visible
/// projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProjectAccess {
    Admin,
    #[default]
    User,
}

impl ProjectAccess {
    pub fn only_active(&self) -> bool {
        matches!(self, ProjectAccess::User)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectAccess::Admin => "admin",
            ProjectAccess::User => "user",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProjectListQuery {
    /// `admin` lists hidden projects too. Defaults to `user`.
    #[serde(default)]
    pub access_by: ProjectAccess,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProjectStatusUpdate {
    pub status: bool,
}

fn default_image() -> String {
    DEFAULT_PROJECT_IMAGE.to_string()
}

fn default_url() -> String {
    DEFAULT_PROJECT_URL.to_string()
}

fn default_status() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minimal_draft_gets_source_defaults() {
        let draft: ProjectDraft = serde_json::from_value(json!({
            "title": "E-Commerce Platform",
            "description": "Full-stack store"
        }))
        .unwrap();

        let valid = draft.validate().unwrap();
        assert_eq!(valid.image, DEFAULT_PROJECT_IMAGE);
        assert_eq!(valid.live_url, "#");
        assert_eq!(valid.github_url, "#");
        assert!(valid.status);
        assert!(!valid.featured);
        assert_eq!(valid.top_priority, 0);
    }

    #[test]
    fn blank_urls_fall_back_to_placeholder() {
        let draft: ProjectDraft = serde_json::from_value(json!({
            "title": "Dashboard",
            "description": "Charts",
            "image": "  ",
            "liveUrl": "",
            "technologies": ["Next.js", " ", "Next.js", "Chart.js"]
        }))
        .unwrap();

        let valid = draft.validate().unwrap();
        assert_eq!(valid.image, DEFAULT_PROJECT_IMAGE);
        assert_eq!(valid.live_url, "#");
        assert_eq!(valid.technologies, vec!["Next.js", "Chart.js"]);
    }

    #[test]
    fn title_length_is_bounded() {
        let draft = ProjectDraft {
            title: "x".repeat(151),
            description: "d".to_string(),
            image: default_image(),
            technologies: vec![],
            live_url: default_url(),
            github_url: default_url(),
            featured: false,
            status: true,
            top_priority: 0,
        };

        assert_eq!(
            draft.validate().unwrap_err().message,
            "Title must be at most 150 characters"
        );
    }

    #[test]
    fn access_defaults_to_user() {
        let q: ProjectListQuery = serde_json::from_value(json!({})).unwrap();
        assert_eq!(q.access_by, ProjectAccess::User);
        assert!(q.access_by.only_active());

        let q: ProjectListQuery = serde_json::from_value(json!({"accessBy": "admin"})).unwrap();
        assert!(!q.access_by.only_active());
    }
}
