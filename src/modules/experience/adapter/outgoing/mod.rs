mod experience_repository_postgres;
pub mod sea_orm_entity;

pub use experience_repository_postgres::ExperienceRepositoryPostgres;
pub(crate) use experience_repository_postgres::active_model as experience_active_model;
