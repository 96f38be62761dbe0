pub mod domain;
pub mod ports;
pub mod service;
pub mod technology_use_cases;

pub use technology_use_cases::TechnologyUseCases;
