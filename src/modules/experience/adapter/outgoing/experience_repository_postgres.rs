use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::experience::adapter::outgoing::sea_orm_entity::experiences::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::experience::application::domain::entities::{Experience, NewExperience};
use crate::modules::experience::application::ports::outgoing::{
    ExperienceRepository, ExperienceRepositoryError,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryPostgres {
    async fn list_experiences(&self) -> Result<Vec<Experience>, ExperienceRepositoryError> {
        let rows = Entity::find()
            .order_by_asc(Column::SortOrder)
            .order_by_desc(Column::StartDate)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter().map(model_to_experience).collect()
    }

    async fn find_experience(&self, id: Uuid) -> Result<Experience, ExperienceRepositoryError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ExperienceRepositoryError::NotFound)?;

        model_to_experience(row)
    }

    async fn create_experience(
        &self,
        data: NewExperience,
    ) -> Result<Experience, ExperienceRepositoryError> {
        let now = Utc::now().fixed_offset();

        let mut model = active_model(data)?;
        model.id = Set(Uuid::new_v4());
        model.created_at = Set(now);
        model.updated_at = Set(now);

        let row = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_experience(row)
    }

    async fn replace_experience(
        &self,
        id: Uuid,
        data: NewExperience,
    ) -> Result<Experience, ExperienceRepositoryError> {
        let mut model = active_model(data)?;
        model.id = ActiveValue::Unchanged(id);

        let row = model.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => ExperienceRepositoryError::NotFound,
            other => map_db_err(other),
        })?;

        model_to_experience(row)
    }

    async fn delete_experience(&self, id: Uuid) -> Result<(), ExperienceRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ExperienceRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

pub(crate) fn active_model(data: NewExperience) -> Result<ActiveModel, ExperienceRepositoryError> {
    Ok(ActiveModel {
        company: Set(data.company),
        position: Set(data.position),
        employment_type: Set(data.kind.as_str().to_string()),
        start_date: Set(data.start_date),
        end_date: Set(data.end_date),
        current: Set(data.current),
        description: Set(data.description),
        achievements: Set(to_json(&data.achievements)?),
        technologies: Set(to_json(&data.technologies)?),
        team_size: Set(data.team_size),
        location: Set(data.location),
        company_website: Set(data.company_website),
        sort_order: Set(data.order),
        ..Default::default()
    })
}

fn model_to_experience(
    model: experiences::Model,
) -> Result<Experience, ExperienceRepositoryError> {
    Ok(Experience {
        id: model.id,
        company: model.company,
        position: model.position,
        kind: model
            .employment_type
            .parse()
            .map_err(|e: crate::shared::domain::UnknownVariant| {
                ExperienceRepositoryError::SerializationError(e.to_string())
            })?,
        start_date: model.start_date,
        end_date: if model.current { None } else { model.end_date },
        current: model.current,
        description: model.description,
        achievements: from_json(&model.achievements)?,
        technologies: from_json(&model.technologies)?,
        team_size: model.team_size,
        location: model.location,
        company_website: model.company_website,
        order: model.sort_order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn to_json<T: serde::Serialize>(
    data: &T,
) -> Result<serde_json::Value, ExperienceRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| ExperienceRepositoryError::SerializationError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, ExperienceRepositoryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| ExperienceRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> ExperienceRepositoryError {
    ExperienceRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
