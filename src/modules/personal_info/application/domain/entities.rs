use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::domain::{
    checked_text, deserialize_optional_date, optional_text, Draft, ValidationError,
};

pub const DEFAULT_AVATAR: &str = "👨‍💻";

const MAX_NAME_LEN: usize = 100;
const MAX_TITLE_LEN: usize = 150;
const MAX_BIO_LEN: usize = 2000;
const MAX_EMAIL_LEN: usize = 254;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl SocialLinks {
    fn normalized(&self) -> Self {
        Self {
            github: optional_text(self.github.clone()),
            linkedin: optional_text(self.linkedin.clone()),
            twitter: optional_text(self.twitter.clone()),
            website: optional_text(self.website.clone()),
        }
    }
}

/// The site owner's profile. At most one exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_date: Option<NaiveDate>,
    pub avatar: String,
    pub social_links: SocialLinks,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfoDraft {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub join_date: Option<NaiveDate>,
    #[serde(default = "default_avatar")]
    pub avatar: String,
    #[serde(default)]
    pub social_links: SocialLinks,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPersonalInfo {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub join_date: Option<NaiveDate>,
    pub avatar: String,
    pub social_links: SocialLinks,
    pub resume_url: Option<String>,
}

impl NewPersonalInfo {
    /// Placeholder profile written on first read.
    pub fn placeholder() -> Self {
        Self {
            name: "Your Name".to_string(),
            title: "MERN Stack Developer".to_string(),
            bio: "Passionate full-stack developer with expertise in MongoDB, Express.js, React, and Node.js. Currently working at ts4u since March 2024.".to_string(),
            email: "your.email@example.com".to_string(),
            phone: Some("+1 (555) 123-4567".to_string()),
            location: Some("Your City, Country".to_string()),
            company: Some("ts4u".to_string()),
            join_date: NaiveDate::from_ymd_opt(2024, 3, 1),
            avatar: DEFAULT_AVATAR.to_string(),
            social_links: SocialLinks {
                github: Some("https://github.com/yourusername".to_string()),
                linkedin: Some("https://linkedin.com/in/yourusername".to_string()),
                twitter: Some("https://twitter.com/yourusername".to_string()),
                website: None,
            },
            resume_url: None,
        }
    }
}

impl Draft for PersonalInfoDraft {
    type Valid = NewPersonalInfo;

    fn validate(&self) -> Result<NewPersonalInfo, ValidationError> {
        Ok(NewPersonalInfo {
            name: checked_text("Name", &self.name, MAX_NAME_LEN)?,
            title: checked_text("Title", &self.title, MAX_TITLE_LEN)?,
            bio: checked_text("Bio", &self.bio, MAX_BIO_LEN)?,
            email: checked_text("Email", &self.email, MAX_EMAIL_LEN)?,
            phone: optional_text(self.phone.clone()),
            location: optional_text(self.location.clone()),
            company: optional_text(self.company.clone()),
            join_date: self.join_date,
            avatar: optional_text(Some(self.avatar.clone())).unwrap_or_else(default_avatar),
            social_links: self.social_links.normalized(),
            resume_url: optional_text(self.resume_url.clone()),
        })
    }
}

impl From<&PersonalInfo> for PersonalInfoDraft {
    fn from(p: &PersonalInfo) -> Self {
        Self {
            name: p.name.clone(),
            title: p.title.clone(),
            bio: p.bio.clone(),
            email: p.email.clone(),
            phone: p.phone.clone(),
            location: p.location.clone(),
            company: p.company.clone(),
            join_date: p.join_date,
            avatar: p.avatar.clone(),
            social_links: p.social_links.clone(),
            resume_url: p.resume_url.clone(),
        }
    }
}

fn default_avatar() -> String {
    DEFAULT_AVATAR.to_string()
}
