use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::modules::experience::application::ports::incoming::use_cases::DeleteExperienceError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/experiences/{id}",
    tag = "experiences",
    params(("id" = Uuid, Path, description = "Experience id")),
    responses(
        (status = 200, description = "Experience deleted", body = MessageResponse),
        (status = 404, description = "Experience not found", body = ErrorResponse)
    )
)]
#[delete("/api/experiences/{id}")]
pub async fn delete_experience_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.experience.delete.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::deleted("Experience deleted successfully"),
        Err(DeleteExperienceError::NotFound) => {
            ApiResponse::not_found("EXPERIENCE_NOT_FOUND", "Experience not found")
        }
        Err(DeleteExperienceError::RepositoryError(e)) => {
            error!("Failed to delete experience: {}", e);
            ApiResponse::internal_error()
        }
    }
}
