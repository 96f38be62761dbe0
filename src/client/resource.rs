use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::client::ClientError;
use crate::modules::contact::application::domain::entities::{
    ContactDraft, ContactMessage, ContactStatusUpdate,
};
use crate::modules::experience::application::domain::entities::{Experience, ExperienceDraft};
use crate::modules::project::application::domain::entities::{Project, ProjectDraft};
use crate::modules::skill::application::domain::entities::{Skill, SkillDraft};
use crate::modules::technology::application::domain::entities::{Technology, TechnologyDraft};
use crate::shared::domain::Draft;

/// A collection exposed under one REST path with the usual list, create,
/// replace and delete routes.
pub trait Resource: DeserializeOwned + Clone + Send + Sync + 'static {
    const PATH: &'static str;

    type Draft: Draft + Serialize + Send + Sync;

    fn id(&self) -> Uuid;

    fn to_draft(&self) -> Self::Draft;

    /// Body sent by a full update of this record.
    fn update_body(&self) -> Result<serde_json::Value, ClientError> {
        draft_body(&self.to_draft())
    }
}

/// Validates `draft` and serializes it. Nothing invalid leaves the client.
pub(crate) fn draft_body<D>(draft: &D) -> Result<serde_json::Value, ClientError>
where
    D: Draft + Serialize,
{
    draft.validate()?;
    serde_json::to_value(draft).map_err(|e| ClientError::Decode(e.to_string()))
}

impl Resource for Project {
    const PATH: &'static str = "/api/projects";
    type Draft = ProjectDraft;

    fn id(&self) -> Uuid {
        self.id
    }

    fn to_draft(&self) -> ProjectDraft {
        ProjectDraft::from(self)
    }
}

impl Resource for Skill {
    const PATH: &'static str = "/api/skills";
    type Draft = SkillDraft;

    fn id(&self) -> Uuid {
        self.id
    }

    fn to_draft(&self) -> SkillDraft {
        SkillDraft::from(self)
    }
}

impl Resource for Experience {
    const PATH: &'static str = "/api/experiences";
    type Draft = ExperienceDraft;

    fn id(&self) -> Uuid {
        self.id
    }

    fn to_draft(&self) -> ExperienceDraft {
        ExperienceDraft::from(self)
    }
}

impl Resource for Technology {
    const PATH: &'static str = "/api/technologies";
    type Draft = TechnologyDraft;

    fn id(&self) -> Uuid {
        self.id
    }

    fn to_draft(&self) -> TechnologyDraft {
        TechnologyDraft::from(self)
    }
}

impl Resource for ContactMessage {
    const PATH: &'static str = "/api/contact";
    type Draft = ContactDraft;

    fn id(&self) -> Uuid {
        self.id
    }

    fn to_draft(&self) -> ContactDraft {
        ContactDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }

    // Only the status of a stored message is editable.
    fn update_body(&self) -> Result<serde_json::Value, ClientError> {
        serde_json::to_value(ContactStatusUpdate {
            status: self.status,
        })
        .map_err(|e| ClientError::Decode(e.to_string()))
    }
}
