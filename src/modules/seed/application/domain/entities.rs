use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::experience::application::domain::entities::NewExperience;
use crate::modules::personal_info::application::domain::entities::NewPersonalInfo;
use crate::modules::project::application::domain::entities::NewProject;
use crate::modules::skill::application::domain::entities::NewSkill;
use crate::modules::technology::application::domain::entities::NewTechnology;

/// Full replacement content for every seeded collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioSeed {
    pub skills: Vec<NewSkill>,
    pub projects: Vec<NewProject>,
    pub experiences: Vec<NewExperience>,
    pub technologies: Vec<NewTechnology>,
    pub personal_info: NewPersonalInfo,
}

impl PortfolioSeed {
    pub fn summary(&self) -> SeedSummary {
        SeedSummary {
            skills: self.skills.len(),
            projects: self.projects.len(),
            experiences: self.experiences.len(),
            technologies: self.technologies.len(),
            personal_info: 1,
        }
    }
}

/// Per-collection record counts written by a reseed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeedSummary {
    pub skills: usize,
    pub projects: usize,
    pub experiences: usize,
    pub technologies: usize,
    pub personal_info: usize,
}
