use actix_web::{post, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::technology::application::domain::entities::{Technology, TechnologyDraft};
use crate::modules::technology::application::ports::incoming::use_cases::CreateTechnologyError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/technologies",
    tag = "technologies",
    request_body = TechnologyDraft,
    responses(
        (status = 201, description = "Technology created", body = inline(SuccessResponse<Technology>)),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 409, description = "A technology with this name already exists", body = ErrorResponse)
    )
)]
#[post("/api/technologies")]
pub async fn create_technology_handler(
    req: web::Json<TechnologyDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.technology.create.execute(req.into_inner()).await {
        Ok(created) => ApiResponse::created(created),
        Err(CreateTechnologyError::AlreadyExists) => ApiResponse::conflict(
            "TECHNOLOGY_ALREADY_EXISTS",
            "Technology with this name already exists",
        ),
        Err(CreateTechnologyError::Validation(e)) => ApiResponse::bad_request(e.code, &e.message),
        Err(CreateTechnologyError::RepositoryError(e)) => {
            error!("Failed to create technology: {}", e);
            ApiResponse::internal_error()
        }
    }
}
