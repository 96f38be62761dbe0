use actix_web::{put, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::technology::application::domain::entities::{Technology, TechnologyDraft};
use crate::modules::technology::application::ports::incoming::use_cases::UpdateTechnologyError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/technologies/{id}",
    tag = "technologies",
    params(("id" = Uuid, Path, description = "Technology id")),
    request_body = TechnologyDraft,
    responses(
        (status = 200, description = "Technology replaced", body = inline(SuccessResponse<Technology>)),
        (status = 404, description = "Technology not found", body = ErrorResponse),
        (status = 409, description = "Name taken by another technology", body = ErrorResponse)
    )
)]
#[put("/api/technologies/{id}")]
pub async fn update_technology_handler(
    path: web::Path<Uuid>,
    req: web::Json<TechnologyDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .technology
        .update
        .execute(path.into_inner(), req.into_inner())
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(UpdateTechnologyError::NotFound) => {
            ApiResponse::not_found("TECHNOLOGY_NOT_FOUND", "Technology not found")
        }
        Err(UpdateTechnologyError::AlreadyExists) => ApiResponse::conflict(
            "TECHNOLOGY_ALREADY_EXISTS",
            "Technology with this name already exists",
        ),
        Err(UpdateTechnologyError::Validation(e)) => ApiResponse::bad_request(e.code, &e.message),
        Err(UpdateTechnologyError::RepositoryError(e)) => {
            error!("Failed to update technology: {}", e);
            ApiResponse::internal_error()
        }
    }
}
