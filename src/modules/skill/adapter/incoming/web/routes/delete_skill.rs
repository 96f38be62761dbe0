use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::modules::skill::application::ports::incoming::use_cases::DeleteSkillError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/skills/{id}",
    tag = "skills",
    params(("id" = Uuid, Path, description = "Skill id")),
    responses(
        (status = 200, description = "Skill deleted", body = MessageResponse),
        (status = 404, description = "Skill not found", body = ErrorResponse)
    )
)]
#[delete("/api/skills/{id}")]
pub async fn delete_skill_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skill.delete.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::deleted("Skill deleted successfully"),
        Err(DeleteSkillError::NotFound) => {
            ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found")
        }
        Err(DeleteSkillError::RepositoryError(e)) => {
            error!("Failed to delete skill: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::modules::skill::application::ports::incoming::use_cases::MockDeleteSkillUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn test_delete_skill_success() {
        let mut uc = MockDeleteSkillUseCase::new();
        uc.expect_execute().times(1).returning(|_| Ok(()));

        let app_state = TestAppStateBuilder::default().with_delete_skill(uc).build();
        let app =
            test::init_service(App::new().app_data(app_state).service(delete_skill_handler)).await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/skills/{}", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Skill deleted successfully");
    }

    #[actix_web::test]
    async fn test_delete_skill_not_found() {
        let mut uc = MockDeleteSkillUseCase::new();
        uc.expect_execute()
            .returning(|_| Err(DeleteSkillError::NotFound));

        let app_state = TestAppStateBuilder::default().with_delete_skill(uc).build();
        let app =
            test::init_service(App::new().app_data(app_state).service(delete_skill_handler)).await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/skills/{}", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
