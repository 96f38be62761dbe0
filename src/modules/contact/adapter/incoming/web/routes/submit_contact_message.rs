use actix_web::{post, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::contact::application::domain::entities::{ContactDraft, ContactMessage};
use crate::modules::contact::application::ports::incoming::use_cases::SubmitContactMessageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactDraft,
    responses(
        (status = 201, description = "Message received", body = inline(SuccessResponse<ContactMessage>)),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_message_handler(
    req: web::Json<ContactDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.submit.execute(req.into_inner()).await {
        Ok(created) => ApiResponse::created(created),
        Err(SubmitContactMessageError::Validation(e)) => {
            ApiResponse::bad_request(e.code, &e.message)
        }
        Err(SubmitContactMessageError::RepositoryError(e)) => {
            error!("Failed to store contact message: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::modules::contact::application::domain::entities::ContactStatus;
    use crate::modules::contact::application::ports::incoming::use_cases::MockSubmitContactMessageUseCase;
    use crate::shared::domain::ValidationError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::sample_contact;

    fn payload(email: &str) -> Value {
        json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": email,
            "subject": "Hello",
            "message": "Let's talk",
            "status": "replied"
        })
    }

    #[actix_web::test]
    async fn test_submit_ignores_client_status() {
        let mut uc = MockSubmitContactMessageUseCase::new();
        uc.expect_execute()
            .times(1)
            .returning(|draft| Ok(sample_contact(&draft.first_name, ContactStatus::Unread)));

        let app_state = TestAppStateBuilder::default()
            .with_submit_contact_message(uc)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(submit_contact_message_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(payload("ada@example.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["status"], "unread");
    }

    #[actix_web::test]
    async fn test_submit_invalid_email() {
        let mut uc = MockSubmitContactMessageUseCase::new();
        uc.expect_execute().returning(|_| {
            Err(SubmitContactMessageError::Validation(ValidationError::new(
                "INVALID_EMAIL",
                "Email must be a valid address",
            )))
        });

        let app_state = TestAppStateBuilder::default()
            .with_submit_contact_message(uc)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(submit_contact_message_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(payload("nope"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_EMAIL");
    }
}
