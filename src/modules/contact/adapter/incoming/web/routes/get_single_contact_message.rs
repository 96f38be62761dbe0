use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::contact::application::domain::entities::ContactMessage;
use crate::modules::contact::application::ports::incoming::use_cases::GetSingleContactMessageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/contact/{id}",
    tag = "contact",
    params(("id" = Uuid, Path, description = "Contact message id")),
    responses(
        (status = 200, description = "Contact message found", body = inline(SuccessResponse<ContactMessage>)),
        (status = 404, description = "Contact message not found", body = ErrorResponse)
    )
)]
#[get("/api/contact/{id}")]
pub async fn get_single_contact_message_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.get_single.execute(path.into_inner()).await {
        Ok(message) => ApiResponse::success(message),
        Err(GetSingleContactMessageError::NotFound) => {
            ApiResponse::not_found("CONTACT_NOT_FOUND", "Contact not found")
        }
        Err(GetSingleContactMessageError::RepositoryError(e)) => {
            error!("Failed to fetch contact message: {}", e);
            ApiResponse::internal_error()
        }
    }
}
