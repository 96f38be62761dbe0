pub mod project_repository;

pub use project_repository::{ProjectRepository, ProjectRepositoryError};

#[cfg(test)]
pub use project_repository::MockProjectRepository;
