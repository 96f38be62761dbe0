mod personal_info_repository_postgres;
pub mod sea_orm_entity;

pub use personal_info_repository_postgres::PersonalInfoRepositoryPostgres;
pub(crate) use personal_info_repository_postgres::active_model as personal_info_active_model;
