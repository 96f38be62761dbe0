use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::experience::application::ports::incoming::use_cases::GetExperiencesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/experiences",
    tag = "experiences",
    responses(
        (status = 200, description = "Experiences sorted by order, latest start first", body = inline(SuccessResponse<Vec<Experience>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/experiences")]
pub async fn get_experiences_handler(data: web::Data<AppState>) -> impl Responder {
    match data.experience.get_list.execute().await {
        Ok(list) => ApiResponse::success(list),
        Err(GetExperiencesError::RepositoryError(e)) => {
            error!("Failed to fetch experiences: {}", e);
            ApiResponse::internal_error()
        }
    }
}
