use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::personal_info::adapter::outgoing::sea_orm_entity::personal_info::{
    self, ActiveModel, Entity,
};
use crate::modules::personal_info::application::domain::entities::{
    NewPersonalInfo, PersonalInfo,
};
use crate::modules::personal_info::application::ports::outgoing::{
    PersonalInfoRepository, PersonalInfoRepositoryError,
};

#[derive(Clone)]
pub struct PersonalInfoRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PersonalInfoRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PersonalInfoRepository for PersonalInfoRepositoryPostgres {
    async fn find_personal_info(
        &self,
    ) -> Result<Option<PersonalInfo>, PersonalInfoRepositoryError> {
        Entity::find()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_personal_info)
            .transpose()
    }

    async fn insert_personal_info(
        &self,
        data: NewPersonalInfo,
    ) -> Result<PersonalInfo, PersonalInfoRepositoryError> {
        let now = Utc::now().fixed_offset();

        let mut model = active_model(data)?;
        model.id = Set(Uuid::new_v4());
        model.singleton = Set(true);
        model.created_at = Set(now);
        model.updated_at = Set(now);

        let row = model.insert(&*self.db).await.map_err(map_insert_error)?;

        model_to_personal_info(row)
    }

    async fn replace_personal_info(
        &self,
        id: Uuid,
        data: NewPersonalInfo,
    ) -> Result<PersonalInfo, PersonalInfoRepositoryError> {
        let mut model = active_model(data)?;
        model.id = ActiveValue::Unchanged(id);

        let row = model.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => PersonalInfoRepositoryError::NotFound,
            other => map_db_err(other),
        })?;

        model_to_personal_info(row)
    }
}

pub(crate) fn active_model(data: NewPersonalInfo) -> Result<ActiveModel, PersonalInfoRepositoryError> {
    let social_links = serde_json::to_value(&data.social_links)
        .map_err(|e| PersonalInfoRepositoryError::SerializationError(e.to_string()))?;

    Ok(ActiveModel {
        name: Set(data.name),
        title: Set(data.title),
        bio: Set(data.bio),
        email: Set(data.email),
        phone: Set(data.phone),
        location: Set(data.location),
        company: Set(data.company),
        join_date: Set(data.join_date),
        avatar: Set(data.avatar),
        social_links: Set(social_links),
        resume_url: Set(data.resume_url),
        ..Default::default()
    })
}

fn model_to_personal_info(
    model: personal_info::Model,
) -> Result<PersonalInfo, PersonalInfoRepositoryError> {
    Ok(PersonalInfo {
        id: model.id,
        name: model.name,
        title: model.title,
        bio: model.bio,
        email: model.email,
        phone: model.phone,
        location: model.location,
        company: model.company,
        join_date: model.join_date,
        avatar: model.avatar,
        social_links: serde_json::from_value(model.social_links)
            .map_err(|e| PersonalInfoRepositoryError::SerializationError(e.to_string()))?,
        resume_url: model.resume_url,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn map_insert_error(e: DbErr) -> PersonalInfoRepositoryError {
    let msg = e.to_string().to_lowercase();

    if msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505") {
        PersonalInfoRepositoryError::AlreadyExists
    } else {
        PersonalInfoRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> PersonalInfoRepositoryError {
    PersonalInfoRepositoryError::DatabaseError(e.to_string())
}
