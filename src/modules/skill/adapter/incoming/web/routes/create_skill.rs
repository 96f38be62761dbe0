use actix_web::{post, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::skill::application::domain::entities::{Skill, SkillDraft};
use crate::modules::skill::application::ports::incoming::use_cases::CreateSkillError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/skills",
    tag = "skills",
    request_body = SkillDraft,
    responses(
        (status = 201, description = "Skill created", body = inline(SuccessResponse<Skill>)),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/skills")]
pub async fn create_skill_handler(
    req: web::Json<SkillDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skill.create.execute(req.into_inner()).await {
        Ok(created) => ApiResponse::created(created),
        Err(CreateSkillError::Validation(e)) => ApiResponse::bad_request(e.code, &e.message),
        Err(CreateSkillError::RepositoryError(e)) => {
            error!("Failed to create skill: {}", e);
            ApiResponse::internal_error()
        }
    }
}
