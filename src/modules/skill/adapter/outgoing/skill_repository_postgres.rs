use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
};
use std::{str::FromStr, sync::Arc};
use uuid::Uuid;

use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::skill::application::domain::entities::{clamp_level, NewSkill, Skill};
use crate::modules::skill::application::ports::outgoing::{SkillRepository, SkillRepositoryError};
use crate::shared::domain::UnknownVariant;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct SkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillRepository for SkillRepositoryPostgres {
    async fn list_skills(&self) -> Result<Vec<Skill>, SkillRepositoryError> {
        let rows = Entity::find()
            .order_by_asc(Column::SortOrder)
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter().map(model_to_skill).collect()
    }

    async fn find_skill(&self, id: Uuid) -> Result<Skill, SkillRepositoryError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(SkillRepositoryError::NotFound)?;

        model_to_skill(row)
    }

    async fn create_skill(&self, data: NewSkill) -> Result<Skill, SkillRepositoryError> {
        let now = Utc::now().fixed_offset();

        let mut model = active_model(data);
        model.id = Set(Uuid::new_v4());
        model.created_at = Set(now);
        model.updated_at = Set(now);

        let row = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_skill(row)
    }

    async fn replace_skill(&self, id: Uuid, data: NewSkill) -> Result<Skill, SkillRepositoryError> {
        let mut model = active_model(data);
        model.id = ActiveValue::Unchanged(id);

        let row = model.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => SkillRepositoryError::NotFound,
            other => map_db_err(other),
        })?;

        model_to_skill(row)
    }

    async fn delete_skill(&self, id: Uuid) -> Result<(), SkillRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(SkillRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

pub(crate) fn active_model(data: NewSkill) -> ActiveModel {
    ActiveModel {
        name: Set(data.name),
        level: Set(i16::from(data.level)),
        category: Set(data.category.as_str().to_string()),
        icon: Set(data.icon.as_str().to_string()),
        image: Set(data.image),
        color: Set(data.color),
        status: Set(data.status),
        sort_order: Set(data.order),
        ..Default::default()
    }
}

fn model_to_skill(model: skills::Model) -> Result<Skill, SkillRepositoryError> {
    Ok(Skill {
        id: model.id,
        name: model.name,
        level: clamp_level(i64::from(model.level)),
        category: parse_column(&model.category)?,
        icon: parse_column(&model.icon)?,
        image: model.image,
        color: model.color,
        status: model.status,
        order: model.sort_order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn parse_column<T>(raw: &str) -> Result<T, SkillRepositoryError>
where
    T: FromStr<Err = UnknownVariant>,
{
    raw.parse()
        .map_err(|e: UnknownVariant| SkillRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> SkillRepositoryError {
    SkillRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
