//! Every repository port backed by plain vectors, for end-to-end tests that
//! run the real services and handlers without Postgres.

use std::cmp::Reverse;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::{
    ContactMessage, ContactStatus, NewContactMessage,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError,
};
use crate::modules::contact::application::ContactUseCases;
use crate::modules::experience::application::domain::entities::{Experience, NewExperience};
use crate::modules::experience::application::ports::outgoing::{
    ExperienceRepository, ExperienceRepositoryError,
};
use crate::modules::experience::application::ExperienceUseCases;
use crate::modules::personal_info::application::domain::entities::{
    NewPersonalInfo, PersonalInfo,
};
use crate::modules::personal_info::application::ports::outgoing::{
    PersonalInfoRepository, PersonalInfoRepositoryError,
};
use crate::modules::personal_info::application::PersonalInfoUseCases;
use crate::modules::project::application::domain::entities::{NewProject, Project};
use crate::modules::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};
use crate::modules::project::application::ProjectUseCases;
use crate::modules::seed::application::domain::entities::PortfolioSeed;
use crate::modules::seed::application::ports::outgoing::{PortfolioSeeder, PortfolioSeederError};
use crate::modules::seed::application::service::SeedPortfolioService;
use crate::modules::skill::application::domain::entities::{NewSkill, Skill};
use crate::modules::skill::application::ports::outgoing::{SkillRepository, SkillRepositoryError};
use crate::modules::skill::application::SkillUseCases;
use crate::modules::technology::application::domain::entities::{NewTechnology, Technology};
use crate::modules::technology::application::ports::outgoing::{
    TechnologyRepository, TechnologyRepositoryError,
};
use crate::modules::technology::application::TechnologyUseCases;
use crate::AppState;

#[derive(Default)]
struct Collections {
    projects: Vec<Project>,
    skills: Vec<Skill>,
    experiences: Vec<Experience>,
    technologies: Vec<Technology>,
    contacts: Vec<ContactMessage>,
    personal_info: Option<PersonalInfo>,
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<Collections>>,
}

impl InMemoryStore {
    /// Real services over this store.
    pub fn app_state(&self) -> AppState {
        AppState {
            project: ProjectUseCases::from_repository(self.clone()),
            skill: SkillUseCases::from_repository(self.clone()),
            experience: ExperienceUseCases::from_repository(self.clone()),
            technology: TechnologyUseCases::from_repository(self.clone()),
            contact: ContactUseCases::from_repository(self.clone()),
            personal_info: PersonalInfoUseCases::from_repository(self.clone()),
            seed: Arc::new(SeedPortfolioService::new(self.clone())),
        }
    }
}

// Newest-first within equal keys: walk insertion order backwards, then sort
// stably.
fn newest_first<T: Clone>(items: &[T]) -> Vec<T> {
    items.iter().rev().cloned().collect()
}

fn project_from(id: Uuid, data: NewProject, created_at: chrono::DateTime<Utc>) -> Project {
    Project {
        id,
        title: data.title,
        description: data.description,
        image: data.image,
        technologies: data.technologies,
        live_url: data.live_url,
        github_url: data.github_url,
        featured: data.featured,
        status: data.status,
        top_priority: data.top_priority,
        created_at,
        updated_at: Utc::now(),
    }
}

fn skill_from(id: Uuid, data: NewSkill, created_at: chrono::DateTime<Utc>) -> Skill {
    Skill {
        id,
        name: data.name,
        level: data.level,
        category: data.category,
        icon: data.icon,
        image: data.image,
        color: data.color,
        status: data.status,
        order: data.order,
        created_at,
        updated_at: Utc::now(),
    }
}

fn experience_from(
    id: Uuid,
    data: NewExperience,
    created_at: chrono::DateTime<Utc>,
) -> Experience {
    Experience {
        id,
        company: data.company,
        position: data.position,
        kind: data.kind,
        start_date: data.start_date,
        end_date: data.end_date,
        current: data.current,
        description: data.description,
        achievements: data.achievements,
        technologies: data.technologies,
        team_size: data.team_size,
        location: data.location,
        company_website: data.company_website,
        order: data.order,
        created_at,
        updated_at: Utc::now(),
    }
}

fn technology_from(
    id: Uuid,
    data: NewTechnology,
    created_at: chrono::DateTime<Utc>,
) -> Technology {
    Technology {
        id,
        name: data.name,
        category: data.category,
        icon: data.icon,
        color: data.color,
        description: data.description,
        order: data.order,
        created_at,
        updated_at: Utc::now(),
    }
}

fn personal_info_from(
    id: Uuid,
    data: NewPersonalInfo,
    created_at: chrono::DateTime<Utc>,
) -> PersonalInfo {
    PersonalInfo {
        id,
        name: data.name,
        title: data.title,
        bio: data.bio,
        email: data.email,
        phone: data.phone,
        location: data.location,
        company: data.company,
        join_date: data.join_date,
        avatar: data.avatar,
        social_links: data.social_links,
        resume_url: data.resume_url,
        created_at,
        updated_at: Utc::now(),
    }
}

#[async_trait]
impl ProjectRepository for InMemoryStore {
    async fn list_projects(
        &self,
        only_active: bool,
    ) -> Result<Vec<Project>, ProjectRepositoryError> {
        let data = self.inner.read().await;
        let mut projects: Vec<Project> = newest_first(&data.projects)
            .into_iter()
            .filter(|p| !only_active || p.status)
            .collect();
        projects.sort_by_key(|p| (Reverse(p.top_priority), Reverse(p.created_at)));
        Ok(projects)
    }

    async fn find_project(&self, id: Uuid) -> Result<Project, ProjectRepositoryError> {
        let data = self.inner.read().await;
        data.projects
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ProjectRepositoryError::NotFound)
    }

    async fn create_project(&self, data: NewProject) -> Result<Project, ProjectRepositoryError> {
        let project = project_from(Uuid::new_v4(), data, Utc::now());
        self.inner.write().await.projects.push(project.clone());
        Ok(project)
    }

    async fn replace_project(
        &self,
        id: Uuid,
        data: NewProject,
    ) -> Result<Project, ProjectRepositoryError> {
        let mut store = self.inner.write().await;
        let slot = store
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ProjectRepositoryError::NotFound)?;
        *slot = project_from(id, data, slot.created_at);
        Ok(slot.clone())
    }

    async fn set_project_status(
        &self,
        id: Uuid,
        status: bool,
    ) -> Result<Project, ProjectRepositoryError> {
        let mut store = self.inner.write().await;
        let slot = store
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ProjectRepositoryError::NotFound)?;
        slot.status = status;
        slot.updated_at = Utc::now();
        Ok(slot.clone())
    }

    async fn delete_project(&self, id: Uuid) -> Result<(), ProjectRepositoryError> {
        let mut store = self.inner.write().await;
        let before = store.projects.len();
        store.projects.retain(|p| p.id != id);
        if store.projects.len() == before {
            return Err(ProjectRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl SkillRepository for InMemoryStore {
    async fn list_skills(&self) -> Result<Vec<Skill>, SkillRepositoryError> {
        let data = self.inner.read().await;
        let mut skills = newest_first(&data.skills);
        skills.sort_by_key(|s| (s.order, Reverse(s.created_at)));
        Ok(skills)
    }

    async fn find_skill(&self, id: Uuid) -> Result<Skill, SkillRepositoryError> {
        let data = self.inner.read().await;
        data.skills
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(SkillRepositoryError::NotFound)
    }

    async fn create_skill(&self, data: NewSkill) -> Result<Skill, SkillRepositoryError> {
        let skill = skill_from(Uuid::new_v4(), data, Utc::now());
        self.inner.write().await.skills.push(skill.clone());
        Ok(skill)
    }

    async fn replace_skill(&self, id: Uuid, data: NewSkill) -> Result<Skill, SkillRepositoryError> {
        let mut store = self.inner.write().await;
        let slot = store
            .skills
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(SkillRepositoryError::NotFound)?;
        *slot = skill_from(id, data, slot.created_at);
        Ok(slot.clone())
    }

    async fn delete_skill(&self, id: Uuid) -> Result<(), SkillRepositoryError> {
        let mut store = self.inner.write().await;
        let before = store.skills.len();
        store.skills.retain(|s| s.id != id);
        if store.skills.len() == before {
            return Err(SkillRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl ExperienceRepository for InMemoryStore {
    async fn list_experiences(&self) -> Result<Vec<Experience>, ExperienceRepositoryError> {
        let data = self.inner.read().await;
        let mut experiences = newest_first(&data.experiences);
        experiences.sort_by_key(|e| (e.order, Reverse(e.start_date)));
        Ok(experiences)
    }

    async fn find_experience(&self, id: Uuid) -> Result<Experience, ExperienceRepositoryError> {
        let data = self.inner.read().await;
        data.experiences
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(ExperienceRepositoryError::NotFound)
    }

    async fn create_experience(
        &self,
        data: NewExperience,
    ) -> Result<Experience, ExperienceRepositoryError> {
        let experience = experience_from(Uuid::new_v4(), data, Utc::now());
        self.inner.write().await.experiences.push(experience.clone());
        Ok(experience)
    }

    async fn replace_experience(
        &self,
        id: Uuid,
        data: NewExperience,
    ) -> Result<Experience, ExperienceRepositoryError> {
        let mut store = self.inner.write().await;
        let slot = store
            .experiences
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(ExperienceRepositoryError::NotFound)?;
        *slot = experience_from(id, data, slot.created_at);
        Ok(slot.clone())
    }

    async fn delete_experience(&self, id: Uuid) -> Result<(), ExperienceRepositoryError> {
        let mut store = self.inner.write().await;
        let before = store.experiences.len();
        store.experiences.retain(|e| e.id != id);
        if store.experiences.len() == before {
            return Err(ExperienceRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl TechnologyRepository for InMemoryStore {
    async fn list_technologies(&self) -> Result<Vec<Technology>, TechnologyRepositoryError> {
        let data = self.inner.read().await;
        let mut technologies = data.technologies.clone();
        technologies.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.cmp(&b.name)));
        Ok(technologies)
    }

    async fn find_technology(&self, id: Uuid) -> Result<Technology, TechnologyRepositoryError> {
        let data = self.inner.read().await;
        data.technologies
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(TechnologyRepositoryError::NotFound)
    }

    async fn create_technology(
        &self,
        data: NewTechnology,
    ) -> Result<Technology, TechnologyRepositoryError> {
        let mut store = self.inner.write().await;
        // Same rule as the unique index on lower(name).
        if store
            .technologies
            .iter()
            .any(|t| t.name.eq_ignore_ascii_case(&data.name))
        {
            return Err(TechnologyRepositoryError::NameAlreadyExists);
        }
        let technology = technology_from(Uuid::new_v4(), data, Utc::now());
        store.technologies.push(technology.clone());
        Ok(technology)
    }

    async fn replace_technology(
        &self,
        id: Uuid,
        data: NewTechnology,
    ) -> Result<Technology, TechnologyRepositoryError> {
        let mut store = self.inner.write().await;
        if store
            .technologies
            .iter()
            .any(|t| t.id != id && t.name.eq_ignore_ascii_case(&data.name))
        {
            return Err(TechnologyRepositoryError::NameAlreadyExists);
        }
        let slot = store
            .technologies
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TechnologyRepositoryError::NotFound)?;
        *slot = technology_from(id, data, slot.created_at);
        Ok(slot.clone())
    }

    async fn delete_technology(&self, id: Uuid) -> Result<(), TechnologyRepositoryError> {
        let mut store = self.inner.write().await;
        let before = store.technologies.len();
        store.technologies.retain(|t| t.id != id);
        if store.technologies.len() == before {
            return Err(TechnologyRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl ContactRepository for InMemoryStore {
    async fn list_messages(&self) -> Result<Vec<ContactMessage>, ContactRepositoryError> {
        let data = self.inner.read().await;
        let mut messages = newest_first(&data.contacts);
        messages.sort_by_key(|m| Reverse(m.created_at));
        Ok(messages)
    }

    async fn find_message(&self, id: Uuid) -> Result<ContactMessage, ContactRepositoryError> {
        let data = self.inner.read().await;
        data.contacts
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or(ContactRepositoryError::NotFound)
    }

    async fn create_message(
        &self,
        data: NewContactMessage,
    ) -> Result<ContactMessage, ContactRepositoryError> {
        let now = Utc::now();
        let message = ContactMessage {
            id: Uuid::new_v4(),
            first_name: data.first_name,
            last_name: data.last_name,
            email: data.email,
            subject: data.subject,
            message: data.message,
            status: ContactStatus::Unread,
            created_at: now,
            updated_at: now,
        };
        self.inner.write().await.contacts.push(message.clone());
        Ok(message)
    }

    async fn set_message_status(
        &self,
        id: Uuid,
        status: ContactStatus,
    ) -> Result<ContactMessage, ContactRepositoryError> {
        let mut store = self.inner.write().await;
        let slot = store
            .contacts
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(ContactRepositoryError::NotFound)?;
        slot.status = status;
        slot.updated_at = Utc::now();
        Ok(slot.clone())
    }

    async fn delete_message(&self, id: Uuid) -> Result<(), ContactRepositoryError> {
        let mut store = self.inner.write().await;
        let before = store.contacts.len();
        store.contacts.retain(|m| m.id != id);
        if store.contacts.len() == before {
            return Err(ContactRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl PersonalInfoRepository for InMemoryStore {
    async fn find_personal_info(
        &self,
    ) -> Result<Option<PersonalInfo>, PersonalInfoRepositoryError> {
        Ok(self.inner.read().await.personal_info.clone())
    }

    async fn insert_personal_info(
        &self,
        data: NewPersonalInfo,
    ) -> Result<PersonalInfo, PersonalInfoRepositoryError> {
        let mut store = self.inner.write().await;
        if store.personal_info.is_some() {
            return Err(PersonalInfoRepositoryError::AlreadyExists);
        }
        let info = personal_info_from(Uuid::new_v4(), data, Utc::now());
        store.personal_info = Some(info.clone());
        Ok(info)
    }

    async fn replace_personal_info(
        &self,
        id: Uuid,
        data: NewPersonalInfo,
    ) -> Result<PersonalInfo, PersonalInfoRepositoryError> {
        let mut store = self.inner.write().await;
        let slot = store
            .personal_info
            .as_mut()
            .filter(|p| p.id == id)
            .ok_or(PersonalInfoRepositoryError::NotFound)?;
        *slot = personal_info_from(id, data, slot.created_at);
        Ok(slot.clone())
    }
}

#[async_trait]
impl PortfolioSeeder for InMemoryStore {
    async fn replace_all(&self, seed: PortfolioSeed) -> Result<(), PortfolioSeederError> {
        let now = Utc::now();
        let mut store = self.inner.write().await;

        store.skills = seed
            .skills
            .into_iter()
            .map(|s| skill_from(Uuid::new_v4(), s, now))
            .collect();
        store.projects = seed
            .projects
            .into_iter()
            .map(|p| project_from(Uuid::new_v4(), p, now))
            .collect();
        store.experiences = seed
            .experiences
            .into_iter()
            .map(|e| experience_from(Uuid::new_v4(), e, now))
            .collect();
        store.technologies = seed
            .technologies
            .into_iter()
            .map(|t| technology_from(Uuid::new_v4(), t, now))
            .collect();
        store.personal_info = Some(personal_info_from(Uuid::new_v4(), seed.personal_info, now));
        Ok(())
    }
}
