use actix_web::{get, web, Responder};
use tracing::{debug, error};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::application::domain::entities::{Project, ProjectListQuery};
use crate::modules::project::application::ports::incoming::use_cases::GetProjectsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    params(ProjectListQuery),
    responses(
        (status = 200, description = "Projects by priority, newest first", body = inline(SuccessResponse<Vec<Project>>)),
        (status = 400, description = "Unknown accessBy value", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(
    query: web::Query<ProjectListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let access = query.into_inner().access_by;
    debug!(access = access.as_str(), "listing projects");

    match data.project.get_list.execute(access).await {
        Ok(projects) => ApiResponse::success(projects),
        Err(GetProjectsError::QueryFailed(e)) => {
            error!("Failed to fetch projects: {}", e);
            ApiResponse::internal_error()
        }
    }
}
