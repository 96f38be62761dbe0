use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::modules::technology::application::ports::incoming::use_cases::DeleteTechnologyError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/technologies/{id}",
    tag = "technologies",
    params(("id" = Uuid, Path, description = "Technology id")),
    responses(
        (status = 200, description = "Technology deleted", body = MessageResponse),
        (status = 404, description = "Technology not found", body = ErrorResponse)
    )
)]
#[delete("/api/technologies/{id}")]
pub async fn delete_technology_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.technology.delete.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::deleted("Technology deleted successfully"),
        Err(DeleteTechnologyError::NotFound) => {
            ApiResponse::not_found("TECHNOLOGY_NOT_FOUND", "Technology not found")
        }
        Err(DeleteTechnologyError::RepositoryError(e)) => {
            error!("Failed to delete technology: {}", e);
            ApiResponse::internal_error()
        }
    }
}
