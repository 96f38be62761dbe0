use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::project::application::domain::entities::{NewProject, Project};
use crate::modules::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn list_projects(
        &self,
        only_active: bool,
    ) -> Result<Vec<Project>, ProjectRepositoryError> {
        let mut query = Entity::find();

        if only_active {
            query = query.filter(Column::Status.eq(true));
        }

        let rows = query
            .order_by_desc(Column::TopPriority)
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter().map(model_to_project).collect()
    }

    async fn find_project(&self, id: Uuid) -> Result<Project, ProjectRepositoryError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectRepositoryError::NotFound)?;

        model_to_project(row)
    }

    async fn create_project(&self, data: NewProject) -> Result<Project, ProjectRepositoryError> {
        let now = Utc::now().fixed_offset();

        let mut model = active_model(data)?;
        model.id = Set(Uuid::new_v4());
        model.created_at = Set(now);
        model.updated_at = Set(now);

        let row = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_project(row)
    }

    async fn replace_project(
        &self,
        id: Uuid,
        data: NewProject,
    ) -> Result<Project, ProjectRepositoryError> {
        let mut model = active_model(data)?;
        model.id = ActiveValue::Unchanged(id);

        let row = model.update(&*self.db).await.map_err(map_update_err)?;

        model_to_project(row)
    }

    async fn set_project_status(
        &self,
        id: Uuid,
        status: bool,
    ) -> Result<Project, ProjectRepositoryError> {
        let model = ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: Set(status),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let row = model.update(&*self.db).await.map_err(map_update_err)?;

        model_to_project(row)
    }

    async fn delete_project(&self, id: Uuid) -> Result<(), ProjectRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

pub(crate) fn active_model(data: NewProject) -> Result<ActiveModel, ProjectRepositoryError> {
    Ok(ActiveModel {
        title: Set(data.title),
        description: Set(data.description),
        image: Set(data.image),
        technologies: Set(to_json(&data.technologies)?),
        live_url: Set(data.live_url),
        github_url: Set(data.github_url),
        featured: Set(data.featured),
        status: Set(data.status),
        top_priority: Set(data.top_priority),
        ..Default::default()
    })
}

fn model_to_project(model: projects::Model) -> Result<Project, ProjectRepositoryError> {
    Ok(Project {
        id: model.id,
        title: model.title,
        description: model.description,
        image: model.image,
        technologies: from_json(&model.technologies)?,
        live_url: model.live_url,
        github_url: model.github_url,
        featured: model.featured,
        status: model.status,
        top_priority: model.top_priority,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, ProjectRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, ProjectRepositoryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn map_update_err(e: DbErr) -> ProjectRepositoryError {
    match e {
        DbErr::RecordNotUpdated => ProjectRepositoryError::NotFound,
        other => map_db_err(other),
    }
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
