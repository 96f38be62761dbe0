use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::technology::application::domain::entities::Technology;
use crate::modules::technology::application::ports::incoming::use_cases::GetTechnologiesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/technologies",
    tag = "technologies",
    responses(
        (status = 200, description = "Technologies sorted by order then name", body = inline(SuccessResponse<Vec<Technology>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/technologies")]
pub async fn get_technologies_handler(data: web::Data<AppState>) -> impl Responder {
    match data.technology.get_list.execute().await {
        Ok(list) => ApiResponse::success(list),
        Err(GetTechnologiesError::RepositoryError(e)) => {
            error!("Failed to fetch technologies: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::modules::technology::application::ports::incoming::use_cases::MockGetTechnologiesUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::sample_technology;

    #[actix_web::test]
    async fn test_get_technologies_success() {
        let mut uc = MockGetTechnologiesUseCase::new();
        uc.expect_execute()
            .returning(|| Ok(vec![sample_technology("React", 0)]));

        let app_state = TestAppStateBuilder::default().with_get_technologies(uc).build();
        let app =
            test::init_service(App::new().app_data(app_state).service(get_technologies_handler))
                .await;

        let req = test::TestRequest::get().uri("/api/technologies").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["name"], "React");
        assert_eq!(body["data"][0]["category"], "frontend");
        assert_eq!(body["data"][0]["icon"], "Code");
    }
}
