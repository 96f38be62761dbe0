pub mod technology_repository;

pub use technology_repository::{TechnologyRepository, TechnologyRepositoryError};

#[cfg(test)]
pub use technology_repository::MockTechnologyRepository;
