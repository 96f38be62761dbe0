use async_trait::async_trait;
use tracing::info;

use crate::modules::seed::application::domain::demo_data::demo_portfolio;
use crate::modules::seed::application::domain::entities::SeedSummary;
use crate::modules::seed::application::ports::incoming::use_cases::{
    SeedPortfolioError, SeedPortfolioUseCase,
};
use crate::modules::seed::application::ports::outgoing::PortfolioSeeder;

pub struct SeedPortfolioService<S>
where
    S: PortfolioSeeder,
{
    seeder: S,
}

impl<S> SeedPortfolioService<S>
where
    S: PortfolioSeeder,
{
    pub fn new(seeder: S) -> Self {
        Self { seeder }
    }
}

#[async_trait]
impl<S> SeedPortfolioUseCase for SeedPortfolioService<S>
where
    S: PortfolioSeeder + Send + Sync,
{
    async fn execute(&self) -> Result<SeedSummary, SeedPortfolioError> {
        let seed = demo_portfolio();
        let summary = seed.summary();

        self.seeder
            .replace_all(seed)
            .await
            .map_err(|e| SeedPortfolioError::SeedFailed(e.to_string()))?;

        info!(
            skills = summary.skills,
            projects = summary.projects,
            experiences = summary.experiences,
            technologies = summary.technologies,
            "portfolio reseeded"
        );

        Ok(summary)
    }
}
