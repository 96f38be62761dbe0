use actix_web::{put, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::application::domain::entities::{Project, ProjectDraft};
use crate::modules::project::application::ports::incoming::use_cases::UpdateProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    tag = "projects",
    params(("id" = Uuid, Path, description = "Project id")),
    request_body = ProjectDraft,
    responses(
        (status = 200, description = "Project replaced", body = inline(SuccessResponse<Project>)),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse)
    )
)]
#[put("/api/projects/{id}")]
pub async fn update_project_handler(
    path: web::Path<Uuid>,
    req: web::Json<ProjectDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .project
        .update
        .execute(path.into_inner(), req.into_inner())
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(UpdateProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        Err(UpdateProjectError::Validation(e)) => ApiResponse::bad_request(e.code, &e.message),
        Err(UpdateProjectError::RepositoryError(e)) => {
            error!("Failed to update project: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use mockall::predicate::{always, eq};
    use serde_json::{json, Value};

    use crate::modules::project::application::ports::incoming::use_cases::MockUpdateProjectUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::sample_project;

    #[actix_web::test]
    async fn test_update_project_success() {
        let id = Uuid::new_v4();

        let mut uc = MockUpdateProjectUseCase::new();
        uc.expect_execute()
            .with(eq(id), always())
            .returning(|id, draft| {
                let mut project = sample_project(&draft.title, draft.status);
                project.id = id;
                project.top_priority = draft.top_priority;
                Ok(project)
            });

        let app_state = TestAppStateBuilder::default()
            .with_update_project(uc)
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(update_project_handler))
                .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/projects/{id}"))
            .set_json(json!({"title": "Portfolio v2", "description": "Rewrite", "topPriority": 9}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], id.to_string());
        assert_eq!(body["data"]["topPriority"], 9);
    }

    #[actix_web::test]
    async fn test_update_project_not_found() {
        let mut uc = MockUpdateProjectUseCase::new();
        uc.expect_execute()
            .returning(|_, _| Err(UpdateProjectError::NotFound));

        let app_state = TestAppStateBuilder::default()
            .with_update_project(uc)
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(update_project_handler))
                .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/projects/{}", Uuid::new_v4()))
            .set_json(json!({"title": "Portfolio v2", "description": "Rewrite"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "PROJECT_NOT_FOUND");
    }
}
