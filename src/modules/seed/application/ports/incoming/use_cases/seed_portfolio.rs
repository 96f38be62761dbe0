use async_trait::async_trait;

use crate::modules::seed::application::domain::entities::SeedSummary;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SeedPortfolioError {
    #[error("seeding failed: {0}")]
    SeedFailed(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SeedPortfolioUseCase: Send + Sync {
    async fn execute(&self) -> Result<SeedSummary, SeedPortfolioError>;
}
