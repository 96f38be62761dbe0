use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::incoming::use_cases::GetSingleSkillError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/skills/{id}",
    tag = "skills",
    params(("id" = Uuid, Path, description = "Skill id")),
    responses(
        (status = 200, description = "Skill found", body = inline(SuccessResponse<Skill>)),
        (status = 404, description = "Skill not found", body = ErrorResponse)
    )
)]
#[get("/api/skills/{id}")]
pub async fn get_single_skill_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skill.get_single.execute(path.into_inner()).await {
        Ok(skill) => ApiResponse::success(skill),
        Err(GetSingleSkillError::NotFound) => {
            ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found")
        }
        Err(GetSingleSkillError::RepositoryError(e)) => {
            error!("Failed to fetch skill: {}", e);
            ApiResponse::internal_error()
        }
    }
}
