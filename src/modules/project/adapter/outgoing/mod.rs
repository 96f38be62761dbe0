mod project_repository_postgres;
pub mod sea_orm_entity;

pub use project_repository_postgres::ProjectRepositoryPostgres;
pub(crate) use project_repository_postgres::active_model as project_active_model;
