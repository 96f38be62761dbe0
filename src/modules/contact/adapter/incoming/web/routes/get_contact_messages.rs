use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::contact::application::domain::entities::ContactMessage;
use crate::modules::contact::application::ports::incoming::use_cases::GetContactMessagesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/contact",
    tag = "contact",
    responses(
        (status = 200, description = "Contact messages, newest first", body = inline(SuccessResponse<Vec<ContactMessage>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/contact")]
pub async fn get_contact_messages_handler(data: web::Data<AppState>) -> impl Responder {
    match data.contact.get_list.execute().await {
        Ok(messages) => ApiResponse::success(messages),
        Err(GetContactMessagesError::RepositoryError(e)) => {
            error!("Failed to fetch contact messages: {}", e);
            ApiResponse::internal_error()
        }
    }
}
