pub mod experience_repository;

pub use experience_repository::{ExperienceRepository, ExperienceRepositoryError};

#[cfg(test)]
pub use experience_repository::MockExperienceRepository;
