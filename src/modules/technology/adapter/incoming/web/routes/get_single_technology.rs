use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::technology::application::domain::entities::Technology;
use crate::modules::technology::application::ports::incoming::use_cases::GetSingleTechnologyError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/technologies/{id}",
    tag = "technologies",
    params(("id" = Uuid, Path, description = "Technology id")),
    responses(
        (status = 200, description = "Technology found", body = inline(SuccessResponse<Technology>)),
        (status = 404, description = "Technology not found", body = ErrorResponse)
    )
)]
#[get("/api/technologies/{id}")]
pub async fn get_single_technology_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.technology.get_single.execute(path.into_inner()).await {
        Ok(technology) => ApiResponse::success(technology),
        Err(GetSingleTechnologyError::NotFound) => {
            ApiResponse::not_found("TECHNOLOGY_NOT_FOUND", "Technology not found")
        }
        Err(GetSingleTechnologyError::RepositoryError(e)) => {
            error!("Failed to fetch technology: {}", e);
            ApiResponse::internal_error()
        }
    }
}
