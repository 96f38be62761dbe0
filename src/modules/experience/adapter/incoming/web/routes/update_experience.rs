use actix_web::{put, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::experience::application::domain::entities::{Experience, ExperienceDraft};
use crate::modules::experience::application::ports::incoming::use_cases::UpdateExperienceError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/experiences/{id}",
    tag = "experiences",
    params(("id" = Uuid, Path, description = "Experience id")),
    request_body = ExperienceDraft,
    responses(
        (status = 200, description = "Experience replaced", body = inline(SuccessResponse<Experience>)),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "Experience not found", body = ErrorResponse)
    )
)]
#[put("/api/experiences/{id}")]
pub async fn update_experience_handler(
    path: web::Path<Uuid>,
    req: web::Json<ExperienceDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .experience
        .update
        .execute(path.into_inner(), req.into_inner())
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(UpdateExperienceError::NotFound) => {
            ApiResponse::not_found("EXPERIENCE_NOT_FOUND", "Experience not found")
        }
        Err(UpdateExperienceError::Validation(e)) => ApiResponse::bad_request(e.code, &e.message),
        Err(UpdateExperienceError::RepositoryError(e)) => {
            error!("Failed to update experience: {}", e);
            ApiResponse::internal_error()
        }
    }
}
