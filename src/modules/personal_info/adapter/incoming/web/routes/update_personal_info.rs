use actix_web::{put, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::personal_info::application::domain::entities::{
    PersonalInfo, PersonalInfoDraft,
};
use crate::modules::personal_info::application::ports::incoming::use_cases::UpdatePersonalInfoError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/personal-info",
    tag = "personal-info",
    request_body = PersonalInfoDraft,
    responses(
        (status = 200, description = "Profile created or replaced", body = inline(SuccessResponse<PersonalInfo>)),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[put("/api/personal-info")]
pub async fn update_personal_info_handler(
    req: web::Json<PersonalInfoDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.personal_info.update.execute(req.into_inner()).await {
        Ok(info) => ApiResponse::success(info),
        Err(UpdatePersonalInfoError::Validation(e)) => ApiResponse::bad_request(e.code, &e.message),
        Err(UpdatePersonalInfoError::RepositoryError(e)) => {
            error!("Failed to update personal info: {}", e);
            ApiResponse::internal_error()
        }
    }
}
