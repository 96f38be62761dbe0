pub mod sea_orm_entity;
mod technology_repository_postgres;

pub use technology_repository_postgres::TechnologyRepositoryPostgres;
pub(crate) use technology_repository_postgres::active_model as technology_active_model;
