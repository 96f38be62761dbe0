use actix_web::{post, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::application::domain::entities::{Project, ProjectDraft};
use crate::modules::project::application::ports::incoming::use_cases::CreateProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "projects",
    request_body = ProjectDraft,
    responses(
        (status = 201, description = "Project created", body = inline(SuccessResponse<Project>)),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/projects")]
pub async fn create_project_handler(
    req: web::Json<ProjectDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.create.execute(req.into_inner()).await {
        Ok(created) => ApiResponse::created(created),
        Err(CreateProjectError::Validation(e)) => ApiResponse::bad_request(e.code, &e.message),
        Err(CreateProjectError::RepositoryError(e)) => {
            error!("Failed to create project: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::modules::project::application::ports::incoming::use_cases::MockCreateProjectUseCase;
    use crate::shared::api::custom_json_config;
    use crate::shared::domain::ValidationError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::sample_project;

    #[actix_web::test]
    async fn test_create_project_success() {
        let mut uc = MockCreateProjectUseCase::new();
        uc.expect_execute()
            .withf(|draft| draft.title == "Chat App" && draft.github_url == "#")
            .times(1)
            .returning(|draft| Ok(sample_project(&draft.title, draft.status)));

        let app_state = TestAppStateBuilder::default()
            .with_create_project(uc)
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(create_project_handler))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/projects")
            .set_json(json!({"title": "Chat App", "description": "Realtime chat"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["title"], "Chat App");
    }

    #[actix_web::test]
    async fn test_create_project_validation_error() {
        let mut uc = MockCreateProjectUseCase::new();
        uc.expect_execute()
            .returning(|_| Err(CreateProjectError::Validation(ValidationError::required("Title"))));

        let app_state = TestAppStateBuilder::default()
            .with_create_project(uc)
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(create_project_handler))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/projects")
            .set_json(json!({"title": " ", "description": "Realtime chat"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "Title is required");
    }

    #[actix_web::test]
    async fn test_create_project_missing_description_is_rejected() {
        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_json_config())
                .service(create_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/projects")
            .set_json(json!({"title": "Chat App"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
