use crate::api::schemas::{ErrorDetail, ErrorResponse, MessageResponse};
use utoipa::OpenApi;

use crate::modules::contact::application::domain::entities::{
    ContactDraft, ContactMessage, ContactStatus, ContactStatusUpdate,
};
use crate::modules::experience::application::domain::entities::{
    Experience, ExperienceDraft, ExperienceType,
};
use crate::modules::personal_info::application::domain::entities::{
    PersonalInfo, PersonalInfoDraft, SocialLinks,
};
use crate::modules::project::application::domain::entities::{
    Project, ProjectAccess, ProjectDraft, ProjectStatusUpdate,
};
use crate::modules::seed::application::domain::entities::SeedSummary;
use crate::modules::skill::application::domain::entities::{Skill, SkillCategory, SkillDraft};
use crate::modules::technology::application::domain::entities::{
    Technology, TechnologyCategory, TechnologyDraft,
};
use crate::shared::domain::Icon;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Content API behind the portfolio site and its admin dashboard",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Projects
        crate::project::adapter::incoming::web::routes::get_projects_handler,
        crate::project::adapter::incoming::web::routes::get_single_project_handler,
        crate::project::adapter::incoming::web::routes::create_project_handler,
        crate::project::adapter::incoming::web::routes::update_project_handler,
        crate::project::adapter::incoming::web::routes::set_project_status_handler,
        crate::project::adapter::incoming::web::routes::delete_project_handler,

        // Skills
        crate::skill::adapter::incoming::web::routes::get_skills_handler,
        crate::skill::adapter::incoming::web::routes::get_single_skill_handler,
        crate::skill::adapter::incoming::web::routes::create_skill_handler,
        crate::skill::adapter::incoming::web::routes::update_skill_handler,
        crate::skill::adapter::incoming::web::routes::delete_skill_handler,

        // Experiences
        crate::experience::adapter::incoming::web::routes::get_experiences_handler,
        crate::experience::adapter::incoming::web::routes::get_single_experience_handler,
        crate::experience::adapter::incoming::web::routes::create_experience_handler,
        crate::experience::adapter::incoming::web::routes::update_experience_handler,
        crate::experience::adapter::incoming::web::routes::delete_experience_handler,

        // Technologies
        crate::technology::adapter::incoming::web::routes::get_technologies_handler,
        crate::technology::adapter::incoming::web::routes::get_single_technology_handler,
        crate::technology::adapter::incoming::web::routes::create_technology_handler,
        crate::technology::adapter::incoming::web::routes::update_technology_handler,
        crate::technology::adapter::incoming::web::routes::delete_technology_handler,

        // Contact
        crate::contact::adapter::incoming::web::routes::get_contact_messages_handler,
        crate::contact::adapter::incoming::web::routes::get_single_contact_message_handler,
        crate::contact::adapter::incoming::web::routes::submit_contact_message_handler,
        crate::contact::adapter::incoming::web::routes::update_contact_status_handler,
        crate::contact::adapter::incoming::web::routes::delete_contact_message_handler,

        // Personal info
        crate::personal_info::adapter::incoming::web::routes::get_personal_info_handler,
        crate::personal_info::adapter::incoming::web::routes::update_personal_info_handler,

        // Seed
        crate::seed::adapter::incoming::web::routes::seed_portfolio_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,
            MessageResponse,

            Icon,
            Project,
            ProjectDraft,
            ProjectAccess,
            ProjectStatusUpdate,
            Skill,
            SkillDraft,
            SkillCategory,
            Experience,
            ExperienceDraft,
            ExperienceType,
            Technology,
            TechnologyDraft,
            TechnologyCategory,
            ContactMessage,
            ContactDraft,
            ContactStatus,
            ContactStatusUpdate,
            PersonalInfo,
            PersonalInfoDraft,
            SocialLinks,
            SeedSummary
        )
    ),
    tags(
        (name = "projects", description = "Portfolio projects"),
        (name = "skills", description = "Skill bars"),
        (name = "experiences", description = "Work history"),
        (name = "technologies", description = "Technology badges"),
        (name = "contact", description = "Contact form messages"),
        (name = "personal-info", description = "Site owner profile"),
        (name = "seed", description = "Demo content"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_resource_is_documented() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/api/projects",
            "/api/projects/{id}",
            "/api/projects/{id}/status",
            "/api/skills",
            "/api/experiences/{id}",
            "/api/technologies",
            "/api/contact/{id}",
            "/api/personal-info",
            "/api/seed",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing path {expected}"
            );
        }
    }
}
