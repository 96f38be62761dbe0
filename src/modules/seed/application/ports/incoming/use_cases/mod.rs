mod seed_portfolio;

pub use seed_portfolio::{SeedPortfolioError, SeedPortfolioUseCase};

#[cfg(test)]
pub use seed_portfolio::MockSeedPortfolioUseCase;
