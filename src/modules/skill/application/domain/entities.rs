use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::domain::{
    checked_text, optional_text, Draft, HexColor, Icon, UnknownVariant, ValidationError,
    DEFAULT_COLOR,
};

pub const MAX_SKILL_LEVEL: i64 = 100;
const MAX_NAME_LEN: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Tools,
    Mobile,
}

impl SkillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Database => "database",
            SkillCategory::Tools => "tools",
            SkillCategory::Mobile => "mobile",
        }
    }
}

impl FromStr for SkillCategory {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "frontend" => Ok(SkillCategory::Frontend),
            "backend" => Ok(SkillCategory::Backend),
            "database" => Ok(SkillCategory::Database),
            "tools" => Ok(SkillCategory::Tools),
            "mobile" => Ok(SkillCategory::Mobile),
            other => Err(UnknownVariant::new("skill category", other)),
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    /// Always within `0..=100`.
    pub level: u8,
    pub category: SkillCategory,
    pub icon: Icon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub color: String,
    pub status: bool,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/replace payload. Out-of-range levels are clamped rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillDraft {
    pub name: String,
    #[serde(deserialize_with = "deserialize_level")]
    pub level: i64,
    pub category: SkillCategory,
    #[serde(default)]
    pub icon: Icon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_status")]
    pub status: bool,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSkill {
    pub name: String,
    pub level: u8,
    pub category: SkillCategory,
    pub icon: Icon,
    pub image: Option<String>,
    pub color: String,
    pub status: bool,
    pub order: i32,
}

/// Accepts any JSON number; fractional levels round to the nearest integer.
fn deserialize_level<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    // `as` saturates, the clamp happens at validation
    Ok(raw.round() as i64)
}

pub fn clamp_level(level: i64) -> u8 {
    // bounded by MAX_SKILL_LEVEL, fits in u8
    level.clamp(0, MAX_SKILL_LEVEL) as u8
}

impl Draft for SkillDraft {
    type Valid = NewSkill;

    fn validate(&self) -> Result<NewSkill, ValidationError> {
        Ok(NewSkill {
            name: checked_text("Name", &self.name, MAX_NAME_LEN)?,
            level: clamp_level(self.level),
            category: self.category,
            icon: self.icon,
            image: optional_text(self.image.clone()),
            color: HexColor::parse(&self.color)?.into_string(),
            status: self.status,
            order: self.order,
        })
    }
}

impl From<&Skill> for SkillDraft {
    fn from(skill: &Skill) -> Self {
        Self {
            name: skill.name.clone(),
            level: i64::from(skill.level),
            category: skill.category,
            icon: skill.icon,
            image: skill.image.clone(),
            color: skill.color.clone(),
            status: skill.status,
            order: skill.order,
        }
    }
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

fn default_status() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(level: i64) -> SkillDraft {
        SkillDraft {
            name: "  Rust ".to_string(),
            level,
            category: SkillCategory::Backend,
            icon: Icon::Server,
            image: Some("   ".to_string()),
            color: "#dea584".to_string(),
            status: true,
            order: 3,
        }
    }

    #[test]
    fn level_is_clamped_into_range() {
        assert_eq!(draft(150).validate().unwrap().level, 100);
        assert_eq!(draft(-20).validate().unwrap().level, 0);
        assert_eq!(draft(73).validate().unwrap().level, 73);
    }

    #[test]
    fn validate_normalizes_text_and_color() {
        let valid = draft(50).validate().unwrap();
        assert_eq!(valid.name, "Rust");
        assert_eq!(valid.image, None);
        assert_eq!(valid.color, "#DEA584");
    }

    #[test]
    fn validate_rejects_blank_name() {
        let mut d = draft(50);
        d.name = " ".to_string();
        assert_eq!(d.validate().unwrap_err().message, "Name is required");
    }

    #[test]
    fn validate_rejects_bad_color() {
        let mut d = draft(50);
        d.color = "orange".to_string();
        assert_eq!(d.validate().unwrap_err().code, "INVALID_COLOR");
    }

    #[test]
    fn draft_defaults_when_fields_omitted() {
        let d: SkillDraft = serde_json::from_value(serde_json::json!({
            "name": "Go",
            "level": 60,
            "category": "backend"
        }))
        .unwrap();

        assert_eq!(d.icon, Icon::Code);
        assert_eq!(d.color, DEFAULT_COLOR);
        assert!(d.status);
        assert_eq!(d.order, 0);
    }

    #[test]
    fn fractional_and_float_levels_are_accepted_then_clamped() {
        let level_of = |level: serde_json::Value| {
            let d: SkillDraft = serde_json::from_value(serde_json::json!({
                "name": "Go",
                "level": level,
                "category": "backend"
            }))
            .unwrap();
            d.validate().unwrap().level
        };

        assert_eq!(level_of(serde_json::json!(150.0)), 100);
        assert_eq!(level_of(serde_json::json!(75.5)), 76);
        assert_eq!(level_of(serde_json::json!(-3.2)), 0);
        assert_eq!(level_of(serde_json::json!(1e300)), 100);
    }

    #[test]
    fn unknown_category_is_rejected_by_serde() {
        let res = serde_json::from_value::<SkillDraft>(serde_json::json!({
            "name": "Go",
            "level": 60,
            "category": "devops"
        }));
        assert!(res.is_err());
    }
}
