use async_trait::async_trait;

use crate::modules::seed::application::domain::entities::PortfolioSeed;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PortfolioSeederError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Wipes skills, projects, experiences, technologies and personal info and
/// writes `seed` in their place. All or nothing. Contact messages are kept.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PortfolioSeeder: Send + Sync {
    async fn replace_all(&self, seed: PortfolioSeed) -> Result<(), PortfolioSeederError>;
}
