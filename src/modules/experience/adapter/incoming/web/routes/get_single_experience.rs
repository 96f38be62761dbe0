use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::experience::application::ports::incoming::use_cases::GetSingleExperienceError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/experiences/{id}",
    tag = "experiences",
    params(("id" = Uuid, Path, description = "Experience id")),
    responses(
        (status = 200, description = "Experience found", body = inline(SuccessResponse<Experience>)),
        (status = 404, description = "Experience not found", body = ErrorResponse)
    )
)]
#[get("/api/experiences/{id}")]
pub async fn get_single_experience_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.experience.get_single.execute(path.into_inner()).await {
        Ok(experience) => ApiResponse::success(experience),
        Err(GetSingleExperienceError::NotFound) => {
            ApiResponse::not_found("EXPERIENCE_NOT_FOUND", "Experience not found")
        }
        Err(GetSingleExperienceError::RepositoryError(e)) => {
            error!("Failed to fetch experience: {}", e);
            ApiResponse::internal_error()
        }
    }
}
