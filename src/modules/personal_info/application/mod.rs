pub mod domain;
pub mod personal_info_use_cases;
pub mod ports;
pub mod service;

pub use personal_info_use_cases::PersonalInfoUseCases;
