pub mod sea_orm_entity;
mod skill_repository_postgres;

pub use skill_repository_postgres::SkillRepositoryPostgres;
pub(crate) use skill_repository_postgres::active_model as skill_active_model;
