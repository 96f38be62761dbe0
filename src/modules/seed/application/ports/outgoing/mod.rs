pub mod portfolio_seeder;

pub use portfolio_seeder::{PortfolioSeeder, PortfolioSeederError};

#[cfg(test)]
pub use portfolio_seeder::MockPortfolioSeeder;
