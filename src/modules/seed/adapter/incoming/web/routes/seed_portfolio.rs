use actix_web::{post, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::seed::application::domain::entities::SeedSummary;
use crate::modules::seed::application::ports::incoming::use_cases::SeedPortfolioError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/seed",
    tag = "seed",
    responses(
        (status = 200, description = "Collections replaced with demo content", body = inline(SuccessResponse<SeedSummary>)),
        (status = 500, description = "Seeding failed, nothing was changed", body = ErrorResponse)
    )
)]
#[post("/api/seed")]
pub async fn seed_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    match data.seed.execute().await {
        Ok(summary) => ApiResponse::success_with_message(summary, "Database seeded successfully"),
        Err(SeedPortfolioError::SeedFailed(e)) => {
            error!("Failed to seed database: {}", e);
            ApiResponse::internal_error()
        }
    }
}
