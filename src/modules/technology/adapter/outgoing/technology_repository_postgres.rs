use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
};
use std::{str::FromStr, sync::Arc};
use uuid::Uuid;

use crate::modules::technology::adapter::outgoing::sea_orm_entity::technologies::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::technology::application::domain::entities::{NewTechnology, Technology};
use crate::modules::technology::application::ports::outgoing::{
    TechnologyRepository, TechnologyRepositoryError,
};
use crate::shared::domain::UnknownVariant;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct TechnologyRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TechnologyRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TechnologyRepository for TechnologyRepositoryPostgres {
    async fn list_technologies(&self) -> Result<Vec<Technology>, TechnologyRepositoryError> {
        let rows = Entity::find()
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter().map(model_to_technology).collect()
    }

    async fn find_technology(&self, id: Uuid) -> Result<Technology, TechnologyRepositoryError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(TechnologyRepositoryError::NotFound)?;

        model_to_technology(row)
    }

    async fn create_technology(
        &self,
        data: NewTechnology,
    ) -> Result<Technology, TechnologyRepositoryError> {
        let now = Utc::now().fixed_offset();

        let mut model = active_model(data);
        model.id = Set(Uuid::new_v4());
        model.created_at = Set(now);
        model.updated_at = Set(now);

        let row = model.insert(&*self.db).await.map_err(map_name_error)?;

        model_to_technology(row)
    }

    async fn replace_technology(
        &self,
        id: Uuid,
        data: NewTechnology,
    ) -> Result<Technology, TechnologyRepositoryError> {
        let mut model = active_model(data);
        model.id = ActiveValue::Unchanged(id);

        let row = model.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => TechnologyRepositoryError::NotFound,
            other => map_name_error(other),
        })?;

        model_to_technology(row)
    }

    async fn delete_technology(&self, id: Uuid) -> Result<(), TechnologyRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(TechnologyRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

pub(crate) fn active_model(data: NewTechnology) -> ActiveModel {
    ActiveModel {
        name: Set(data.name),
        category: Set(data.category.as_str().to_string()),
        icon: Set(data.icon.as_str().to_string()),
        color: Set(data.color),
        description: Set(data.description),
        sort_order: Set(data.order),
        ..Default::default()
    }
}

fn model_to_technology(
    model: technologies::Model,
) -> Result<Technology, TechnologyRepositoryError> {
    Ok(Technology {
        id: model.id,
        name: model.name,
        category: parse_column(&model.category)?,
        icon: parse_column(&model.icon)?,
        color: model.color,
        description: model.description,
        order: model.sort_order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn parse_column<T>(raw: &str) -> Result<T, TechnologyRepositoryError>
where
    T: FromStr<Err = UnknownVariant>,
{
    raw.parse()
        .map_err(|e: UnknownVariant| TechnologyRepositoryError::SerializationError(e.to_string()))
}

fn map_name_error(e: DbErr) -> TechnologyRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("name")
    {
        TechnologyRepositoryError::NameAlreadyExists
    } else {
        TechnologyRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> TechnologyRepositoryError {
    TechnologyRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
