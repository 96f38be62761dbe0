pub mod personal_info_repository;

pub use personal_info_repository::{PersonalInfoRepository, PersonalInfoRepositoryError};

#[cfg(test)]
pub use personal_info_repository::MockPersonalInfoRepository;
