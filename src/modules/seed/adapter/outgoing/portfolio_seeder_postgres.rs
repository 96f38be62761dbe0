use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, Set, TransactionTrait};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::experience::adapter::outgoing::experience_active_model;
use crate::modules::experience::adapter::outgoing::sea_orm_entity::experiences;
use crate::modules::personal_info::adapter::outgoing::personal_info_active_model;
use crate::modules::personal_info::adapter::outgoing::sea_orm_entity::personal_info;
use crate::modules::project::adapter::outgoing::project_active_model;
use crate::modules::project::adapter::outgoing::sea_orm_entity::projects;
use crate::modules::seed::application::domain::entities::PortfolioSeed;
use crate::modules::seed::application::ports::outgoing::{PortfolioSeeder, PortfolioSeederError};
use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills;
use crate::modules::skill::adapter::outgoing::skill_active_model;
use crate::modules::technology::adapter::outgoing::sea_orm_entity::technologies;
use crate::modules::technology::adapter::outgoing::technology_active_model;

#[derive(Clone)]
pub struct PortfolioSeederPostgres {
    db: Arc<DatabaseConnection>,
}

impl PortfolioSeederPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PortfolioSeeder for PortfolioSeederPostgres {
    async fn replace_all(&self, seed: PortfolioSeed) -> Result<(), PortfolioSeederError> {
        let now = Utc::now().fixed_offset();

        let skill_rows: Vec<skills::ActiveModel> = seed
            .skills
            .into_iter()
            .map(|s| {
                let mut m = skill_active_model(s);
                m.id = Set(Uuid::new_v4());
                m.created_at = Set(now);
                m.updated_at = Set(now);
                m
            })
            .collect();

        let technology_rows: Vec<technologies::ActiveModel> = seed
            .technologies
            .into_iter()
            .map(|t| {
                let mut m = technology_active_model(t);
                m.id = Set(Uuid::new_v4());
                m.created_at = Set(now);
                m.updated_at = Set(now);
                m
            })
            .collect();

        let mut project_rows: Vec<projects::ActiveModel> = Vec::with_capacity(seed.projects.len());
        for p in seed.projects {
            let mut m = project_active_model(p).map_err(serialization_err)?;
            m.id = Set(Uuid::new_v4());
            m.created_at = Set(now);
            m.updated_at = Set(now);
            project_rows.push(m);
        }

        let mut experience_rows: Vec<experiences::ActiveModel> =
            Vec::with_capacity(seed.experiences.len());
        for e in seed.experiences {
            let mut m = experience_active_model(e).map_err(serialization_err)?;
            m.id = Set(Uuid::new_v4());
            m.created_at = Set(now);
            m.updated_at = Set(now);
            experience_rows.push(m);
        }

        let mut profile = personal_info_active_model(seed.personal_info).map_err(serialization_err)?;
        profile.id = Set(Uuid::new_v4());
        profile.singleton = Set(true);
        profile.created_at = Set(now);
        profile.updated_at = Set(now);

        let txn = self.db.begin().await.map_err(map_db_err)?;

        skills::Entity::delete_many().exec(&txn).await.map_err(map_db_err)?;
        projects::Entity::delete_many().exec(&txn).await.map_err(map_db_err)?;
        experiences::Entity::delete_many().exec(&txn).await.map_err(map_db_err)?;
        technologies::Entity::delete_many().exec(&txn).await.map_err(map_db_err)?;
        personal_info::Entity::delete_many().exec(&txn).await.map_err(map_db_err)?;

        if !skill_rows.is_empty() {
            skills::Entity::insert_many(skill_rows)
                .exec_without_returning(&txn)
                .await
                .map_err(map_db_err)?;
        }
        if !project_rows.is_empty() {
            projects::Entity::insert_many(project_rows)
                .exec_without_returning(&txn)
                .await
                .map_err(map_db_err)?;
        }
        if !experience_rows.is_empty() {
            experiences::Entity::insert_many(experience_rows)
                .exec_without_returning(&txn)
                .await
                .map_err(map_db_err)?;
        }
        if !technology_rows.is_empty() {
            technologies::Entity::insert_many(technology_rows)
                .exec_without_returning(&txn)
                .await
                .map_err(map_db_err)?;
        }
        personal_info::Entity::insert(profile)
            .exec_without_returning(&txn)
            .await
            .map_err(map_db_err)?;

        // dropping txn without commit rolls back
        txn.commit().await.map_err(map_db_err)
    }
}

fn serialization_err(e: impl std::fmt::Display) -> PortfolioSeederError {
    PortfolioSeederError::SerializationError(e.to_string())
}

fn map_db_err(e: DbErr) -> PortfolioSeederError {
    PortfolioSeederError::DatabaseError(e.to_string())
}
