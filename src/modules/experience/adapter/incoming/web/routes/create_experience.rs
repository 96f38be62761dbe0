use actix_web::{post, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::experience::application::domain::entities::{Experience, ExperienceDraft};
use crate::modules::experience::application::ports::incoming::use_cases::CreateExperienceError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/experiences",
    tag = "experiences",
    request_body = ExperienceDraft,
    responses(
        (status = 201, description = "Experience created", body = inline(SuccessResponse<Experience>)),
        (status = 400, description = "Invalid payload", body = ErrorResponse)
    )
)]
#[post("/api/experiences")]
pub async fn create_experience_handler(
    req: web::Json<ExperienceDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.experience.create.execute(req.into_inner()).await {
        Ok(created) => ApiResponse::created(created),
        Err(CreateExperienceError::Validation(e)) => ApiResponse::bad_request(e.code, &e.message),
        Err(CreateExperienceError::RepositoryError(e)) => {
            error!("Failed to create experience: {}", e);
            ApiResponse::internal_error()
        }
    }
}
