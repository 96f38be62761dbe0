use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::personal_info::application::domain::entities::PersonalInfo;
use crate::modules::personal_info::application::ports::incoming::use_cases::GetPersonalInfoError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/personal-info",
    tag = "personal-info",
    responses(
        (status = 200, description = "Profile, created with placeholder values on first read", body = inline(SuccessResponse<PersonalInfo>)),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/personal-info")]
pub async fn get_personal_info_handler(data: web::Data<AppState>) -> impl Responder {
    match data.personal_info.get.execute().await {
        Ok(info) => ApiResponse::success(info),
        Err(GetPersonalInfoError::RepositoryError(e)) => {
            error!("Failed to fetch personal info: {}", e);
            ApiResponse::internal_error()
        }
    }
}
