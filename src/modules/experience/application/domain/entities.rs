use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::domain::{
    checked_text, deserialize_date, deserialize_optional_date, normalize_list, optional_text,
    Draft, UnknownVariant, ValidationError,
};

const MAX_COMPANY_LEN: usize = 100;
const MAX_POSITION_LEN: usize = 100;
const MAX_DESCRIPTION_LEN: usize = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceType {
    Internship,
    FullTime,
    PartTime,
    Contract,
    Freelance,
}

impl ExperienceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceType::Internship => "internship",
            ExperienceType::FullTime => "full-time",
            ExperienceType::PartTime => "part-time",
            ExperienceType::Contract => "contract",
            ExperienceType::Freelance => "freelance",
        }
    }
}

impl FromStr for ExperienceType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "internship" => Ok(ExperienceType::Internship),
            "full-time" => Ok(ExperienceType::FullTime),
            "part-time" => Ok(ExperienceType::PartTime),
            "contract" => Ok(ExperienceType::Contract),
            "freelance" => Ok(ExperienceType::Freelance),
            other => Err(UnknownVariant::new("experience type", other)),
        }
    }
}

impl fmt::Display for ExperienceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One position on the experience timeline.
///
/// `end_date` is always `None` while `current` is true. A finished position
/// without an end date is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    #[serde(rename = "type")]
    pub kind: ExperienceType,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub current: bool,
    pub description: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_website: Option<String>,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceDraft {
    pub company: String,
    pub position: String,
    #[serde(rename = "type")]
    pub kind: ExperienceType,
    #[serde(deserialize_with = "deserialize_date")]
    pub start_date: NaiveDate,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_website: Option<String>,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExperience {
    pub company: String,
    pub position: String,
    pub kind: ExperienceType,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub current: bool,
    pub description: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
    pub team_size: Option<String>,
    pub location: Option<String>,
    pub company_website: Option<String>,
    pub order: i32,
}

impl Draft for ExperienceDraft {
    type Valid = NewExperience;

    fn validate(&self) -> Result<NewExperience, ValidationError> {
        // a current position never carries an end date
        let end_date = if self.current { None } else { self.end_date };

        Ok(NewExperience {
            company: checked_text("Company", &self.company, MAX_COMPANY_LEN)?,
            position: checked_text("Position", &self.position, MAX_POSITION_LEN)?,
            kind: self.kind,
            start_date: self.start_date,
            end_date,
            current: self.current,
            description: checked_text("Description", &self.description, MAX_DESCRIPTION_LEN)?,
            achievements: normalize_list(self.achievements.clone()),
            technologies: normalize_list(self.technologies.clone()),
            team_size: optional_text(self.team_size.clone()),
            location: optional_text(self.location.clone()),
            company_website: optional_text(self.company_website.clone()),
            order: self.order,
        })
    }
}

impl From<&Experience> for ExperienceDraft {
    fn from(e: &Experience) -> Self {
        Self {
            company: e.company.clone(),
            position: e.position.clone(),
            kind: e.kind,
            start_date: e.start_date,
            end_date: e.end_date,
            current: e.current,
            description: e.description.clone(),
            achievements: e.achievements.clone(),
            technologies: e.technologies.clone(),
            team_size: e.team_size.clone(),
            location: e.location.clone(),
            company_website: e.company_website.clone(),
            order: e.order,
        }
    }
}
