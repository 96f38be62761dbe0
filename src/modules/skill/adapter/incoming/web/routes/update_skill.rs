use actix_web::{put, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::skill::application::domain::entities::{Skill, SkillDraft};
use crate::modules::skill::application::ports::incoming::use_cases::UpdateSkillError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/skills/{id}",
    tag = "skills",
    params(("id" = Uuid, Path, description = "Skill id")),
    request_body = SkillDraft,
    responses(
        (status = 200, description = "Skill replaced", body = inline(SuccessResponse<Skill>)),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "Skill not found", body = ErrorResponse)
    )
)]
#[put("/api/skills/{id}")]
pub async fn update_skill_handler(
    path: web::Path<Uuid>,
    req: web::Json<SkillDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .skill
        .update
        .execute(path.into_inner(), req.into_inner())
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(UpdateSkillError::NotFound) => {
            ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found")
        }
        Err(UpdateSkillError::Validation(e)) => ApiResponse::bad_request(e.code, &e.message),
        Err(UpdateSkillError::RepositoryError(e)) => {
            error!("Failed to update skill: {}", e);
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

    use crate::modules::skill::application::ports::incoming::use_cases::MockUpdateSkillUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::sample_skill;

    #[actix_web::test]
    async fn test_update_skill_success() {
        let id = Uuid::new_v4();

        let mut uc = MockUpdateSkillUseCase::new();
        uc.expect_execute()
            .with(eq(id), always())
            .returning(|id, draft| {
                let mut skill = sample_skill(&draft.name, draft.order);
                skill.id = id;
                Ok(skill)
            });

        let app_state = TestAppStateBuilder::default().with_update_skill(uc).build();
        let app =
            test::init_service(App::new().app_data(app_state).service(update_skill_handler)).await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/skills/{id}"))
            .set_json(json!({"name": "Next.js", "level": 88, "category": "frontend", "order": 6}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], id.to_string());
        assert_eq!(body["data"]["name"], "Next.js");
        assert_eq!(body["data"]["order"], 6);
    }

    #[actix_web::test]
    async fn test_update_skill_not_found() {
        let mut uc = MockUpdateSkillUseCase::new();
        uc.expect_execute()
            .returning(|_, _| Err(UpdateSkillError::NotFound));

        let app_state = TestAppStateBuilder::default().with_update_skill(uc).build();
        let app =
            test::init_service(App::new().app_data(app_state).service(update_skill_handler)).await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/skills/{}", Uuid::new_v4()))
            .set_json(json!({"name": "Next.js", "level": 88, "category": "frontend"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "SKILL_NOT_FOUND");
    }
}
