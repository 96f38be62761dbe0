mod portfolio_seeder_postgres;

pub use portfolio_seeder_postgres::PortfolioSeederPostgres;
