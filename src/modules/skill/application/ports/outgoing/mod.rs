pub mod skill_repository;

pub use skill_repository::{SkillRepository, SkillRepositoryError};

#[cfg(test)]
pub use skill_repository::MockSkillRepository;
