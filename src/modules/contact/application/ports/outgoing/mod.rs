pub mod contact_repository;

pub use contact_repository::{ContactRepository, ContactRepositoryError};

#[cfg(test)]
pub use contact_repository::MockContactRepository;
