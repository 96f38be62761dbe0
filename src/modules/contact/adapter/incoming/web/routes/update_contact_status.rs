use actix_web::{put, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::contact::application::domain::entities::{
    ContactMessage, ContactStatusUpdate,
};
use crate::modules::contact::application::ports::incoming::use_cases::UpdateContactStatusError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/contact/{id}",
    tag = "contact",
    params(("id" = Uuid, Path, description = "Contact message id")),
    request_body = ContactStatusUpdate,
    responses(
        (status = 200, description = "Status updated", body = inline(SuccessResponse<ContactMessage>)),
        (status = 400, description = "Unknown status", body = ErrorResponse),
        (status = 404, description = "Contact message not found", body = ErrorResponse)
    )
)]
#[put("/api/contact/{id}")]
pub async fn update_contact_status_handler(
    path: web::Path<Uuid>,
    req: web::Json<ContactStatusUpdate>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .contact
        .update_status
        .execute(path.into_inner(), req.into_inner().status)
        .await
    {
        Ok(message) => ApiResponse::success(message),
        Err(UpdateContactStatusError::NotFound) => {
            ApiResponse::not_found("CONTACT_NOT_FOUND", "Contact not found")
        }
        Err(UpdateContactStatusError::RepositoryError(e)) => {
            error!("Failed to update contact message: {}", e);
            ApiResponse::internal_error()
        }
    }
}
