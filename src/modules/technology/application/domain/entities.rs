use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::domain::{
    checked_text, optional_text, Draft, HexColor, Icon, UnknownVariant, ValidationError,
    DEFAULT_COLOR,
};

const MAX_NAME_LEN: usize = 100;
const MAX_DESCRIPTION_LEN: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TechnologyCategory {
    Frontend,
    Backend,
    Database,
    Tools,
    Mobile,
    Cloud,
    Testing,
}

impl TechnologyCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TechnologyCategory::Frontend => "frontend",
            TechnologyCategory::Backend => "backend",
            TechnologyCategory::Database => "database",
            TechnologyCategory::Tools => "tools",
            TechnologyCategory::Mobile => "mobile",
            TechnologyCategory::Cloud => "cloud",
            TechnologyCategory::Testing => "testing",
        }
    }
}

impl FromStr for TechnologyCategory {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "frontend" => Ok(TechnologyCategory::Frontend),
            "backend" => Ok(TechnologyCategory::Backend),
            "database" => Ok(TechnologyCategory::Database),
            "tools" => Ok(TechnologyCategory::Tools),
            "mobile" => Ok(TechnologyCategory::Mobile),
            "cloud" => Ok(TechnologyCategory::Cloud),
            "testing" => Ok(TechnologyCategory::Testing),
            other => Err(UnknownVariant::new("technology category", other)),
        }
    }
}

impl fmt::Display for TechnologyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A technology badge. Projects reference these by `name`, so the name is
/// unique (case-insensitively) across the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Technology {
    pub id: Uuid,
    pub name: String,
    pub category: TechnologyCategory,
    pub icon: Icon,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TechnologyDraft {
    pub name: String,
    pub category: TechnologyCategory,
    #[serde(default)]
    pub icon: Icon,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTechnology {
    pub name: String,
    pub category: TechnologyCategory,
    pub icon: Icon,
    pub color: String,
    pub description: Option<String>,
    pub order: i32,
}

impl Draft for TechnologyDraft {
    type Valid = NewTechnology;

    fn validate(&self) -> Result<NewTechnology, ValidationError> {
        let description = optional_text(self.description.clone());
        if let Some(d) = &description {
            if d.chars().count() > MAX_DESCRIPTION_LEN {
                return Err(ValidationError::too_long("Description", MAX_DESCRIPTION_LEN));
            }
        }

        Ok(NewTechnology {
            name: checked_text("Name", &self.name, MAX_NAME_LEN)?,
            category: self.category,
            icon: self.icon,
            color: HexColor::parse(&self.color)?.into_string(),
            description,
            order: self.order,
        })
    }
}

impl From<&Technology> for TechnologyDraft {
    fn from(t: &Technology) -> Self {
        Self {
            name: t.name.clone(),
            category: t.category,
            icon: t.icon,
            color: t.color.clone(),
            description: t.description.clone(),
            order: t.order,
        }
    }
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_payload_gets_defaults() {
        let draft: TechnologyDraft = serde_json::from_value(serde_json::json!({
            "name": "React",
            "category": "frontend",
            "color": "#61DAFB"
        }))
        .unwrap();

        let valid = draft.validate().unwrap();
        assert_eq!(valid.name, "React");
        assert_eq!(valid.icon, Icon::Code);
        assert_eq!(valid.order, 0);
        assert_eq!(valid.description, None);
    }

    #[test]
    fn cloud_and_testing_are_valid_categories() {
        assert_eq!("cloud".parse::<TechnologyCategory>().unwrap(), TechnologyCategory::Cloud);
        assert_eq!(
            "testing".parse::<TechnologyCategory>().unwrap(),
            TechnologyCategory::Testing
        );
    }

    #[test]
    fn rejects_overlong_description() {
        let draft = TechnologyDraft {
            name: "Jest".to_string(),
            category: TechnologyCategory::Testing,
            icon: Icon::TestTube,
            color: "#C21325".to_string(),
            description: Some("x".repeat(MAX_DESCRIPTION_LEN + 1)),
            order: 0,
        };

        let err = draft.validate().unwrap_err();
        assert_eq!(err.message, "Description must be at most 500 characters");
    }
}
