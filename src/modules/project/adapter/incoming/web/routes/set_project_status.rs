use actix_web::{patch, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::application::domain::entities::{Project, ProjectStatusUpdate};
use crate::modules::project::application::ports::incoming::use_cases::SetProjectStatusError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    patch,
    path = "/api/projects/{id}/status",
    tag = "projects",
    params(("id" = Uuid, Path, description = "Project id")),
    request_body = ProjectStatusUpdate,
    responses(
        (status = 200, description = "Visibility updated", body = inline(SuccessResponse<Project>)),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse)
    )
)]
#[patch("/api/projects/{id}/status")]
pub async fn set_project_status_handler(
    path: web::Path<Uuid>,
    req: web::Json<ProjectStatusUpdate>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let status = req.into_inner().status;

    match data.project.set_status.execute(id, status).await {
        Ok(project) => {
            info!(project_id = %id, status, "project visibility changed");
            ApiResponse::success(project)
        }
        Err(SetProjectStatusError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        Err(SetProjectStatusError::RepositoryError(e)) => {
            error!("Failed to update project status: {}", e);
            ApiResponse::internal_error()
        }
    }
}
