use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::modules::contact::application::ports::incoming::use_cases::DeleteContactMessageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/contact/{id}",
    tag = "contact",
    params(("id" = Uuid, Path, description = "Contact message id")),
    responses(
        (status = 200, description = "Contact message deleted", body = MessageResponse),
        (status = 404, description = "Contact message not found", body = ErrorResponse)
    )
)]
#[delete("/api/contact/{id}")]
pub async fn delete_contact_message_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.delete.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::deleted("Contact deleted successfully"),
        Err(DeleteContactMessageError::NotFound) => {
            ApiResponse::not_found("CONTACT_NOT_FOUND", "Contact not found")
        }
        Err(DeleteContactMessageError::RepositoryError(e)) => {
            error!("Failed to delete contact message: {}", e);
            ApiResponse::internal_error()
        }
    }
}
