use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::contact::adapter::outgoing::sea_orm_entity::contact_messages::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::contact::application::domain::entities::{
    ContactMessage, ContactStatus, NewContactMessage,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError,
};
use crate::shared::domain::UnknownVariant;

#[derive(Clone)]
pub struct ContactRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryPostgres {
    async fn list_messages(&self) -> Result<Vec<ContactMessage>, ContactRepositoryError> {
        let rows = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter().map(model_to_message).collect()
    }

    async fn find_message(&self, id: Uuid) -> Result<ContactMessage, ContactRepositoryError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ContactRepositoryError::NotFound)?;

        model_to_message(row)
    }

    async fn create_message(
        &self,
        data: NewContactMessage,
    ) -> Result<ContactMessage, ContactRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            first_name: Set(data.first_name),
            last_name: Set(data.last_name),
            email: Set(data.email),
            subject: Set(data.subject),
            message: Set(data.message),
            status: Set(ContactStatus::Unread.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let row = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_message(row)
    }

    async fn set_message_status(
        &self,
        id: Uuid,
        status: ContactStatus,
    ) -> Result<ContactMessage, ContactRepositoryError> {
        let model = ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: Set(status.as_str().to_string()),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let row = model.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => ContactRepositoryError::NotFound,
            other => map_db_err(other),
        })?;

        model_to_message(row)
    }

    async fn delete_message(&self, id: Uuid) -> Result<(), ContactRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ContactRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn model_to_message(
    model: contact_messages::Model,
) -> Result<ContactMessage, ContactRepositoryError> {
    Ok(ContactMessage {
        id: model.id,
        first_name: model.first_name,
        last_name: model.last_name,
        email: model.email,
        subject: model.subject,
        message: model.message,
        status: model
            .status
            .parse()
            .map_err(|e: UnknownVariant| ContactRepositoryError::SerializationError(e.to_string()))?,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn map_db_err(e: DbErr) -> ContactRepositoryError {
    ContactRepositoryError::DatabaseError(e.to_string())
}
