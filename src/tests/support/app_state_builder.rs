use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, GetProjectsUseCase, GetSingleProjectUseCase,
    MockCreateProjectUseCase, MockDeleteProjectUseCase, MockGetProjectsUseCase,
    MockGetSingleProjectUseCase, MockSetProjectStatusUseCase, MockUpdateProjectUseCase,
    SetProjectStatusUseCase, UpdateProjectUseCase,
};
use crate::modules::project::application::ProjectUseCases;
use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillUseCase, DeleteSkillUseCase, GetSingleSkillUseCase, GetSkillsUseCase,
    MockCreateSkillUseCase, MockDeleteSkillUseCase, MockGetSingleSkillUseCase, MockGetSkillsUseCase,
    MockUpdateSkillUseCase, UpdateSkillUseCase,
};
use crate::modules::skill::application::SkillUseCases;
use crate::modules::experience::application::ports::incoming::use_cases::{
    CreateExperienceUseCase, DeleteExperienceUseCase, GetExperiencesUseCase,
    GetSingleExperienceUseCase, MockCreateExperienceUseCase, MockDeleteExperienceUseCase,
    MockGetExperiencesUseCase, MockGetSingleExperienceUseCase, MockUpdateExperienceUseCase,
    UpdateExperienceUseCase,
};
use crate::modules::experience::application::ExperienceUseCases;
use crate::modules::technology::application::ports::incoming::use_cases::{
    CreateTechnologyUseCase, DeleteTechnologyUseCase, GetSingleTechnologyUseCase,
    GetTechnologiesUseCase, MockCreateTechnologyUseCase, MockDeleteTechnologyUseCase,
    MockGetSingleTechnologyUseCase, MockGetTechnologiesUseCase, MockUpdateTechnologyUseCase,
    UpdateTechnologyUseCase,
};
use crate::modules::technology::application::TechnologyUseCases;
use crate::modules::contact::application::ports::incoming::use_cases::{
    DeleteContactMessageUseCase, GetContactMessagesUseCase, GetSingleContactMessageUseCase,
    MockDeleteContactMessageUseCase, MockGetContactMessagesUseCase,
    MockGetSingleContactMessageUseCase, MockSubmitContactMessageUseCase,
    MockUpdateContactStatusUseCase, SubmitContactMessageUseCase, UpdateContactStatusUseCase,
};
use crate::modules::contact::application::ContactUseCases;
use crate::modules::personal_info::application::ports::incoming::use_cases::{
    GetPersonalInfoUseCase, MockGetPersonalInfoUseCase, MockUpdatePersonalInfoUseCase,
    UpdatePersonalInfoUseCase,
};
use crate::modules::personal_info::application::PersonalInfoUseCases;
use crate::modules::seed::application::ports::incoming::use_cases::{
    MockSeedPortfolioUseCase, SeedPortfolioUseCase,
};
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// Every use case starts as an unconfigured mock: a handler that reaches one
/// it was not given fails the test.
pub struct TestAppStateBuilder {
    project: ProjectUseCases,
    skill: SkillUseCases,
    experience: ExperienceUseCases,
    technology: TechnologyUseCases,
    contact: ContactUseCases,
    personal_info: PersonalInfoUseCases,
    seed: Arc<dyn SeedPortfolioUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            project: ProjectUseCases {
                get_list: Arc::new(MockGetProjectsUseCase::new()),
                get_single: Arc::new(MockGetSingleProjectUseCase::new()),
                create: Arc::new(MockCreateProjectUseCase::new()),
                update: Arc::new(MockUpdateProjectUseCase::new()),
                set_status: Arc::new(MockSetProjectStatusUseCase::new()),
                delete: Arc::new(MockDeleteProjectUseCase::new()),
            },
            skill: SkillUseCases {
                get_list: Arc::new(MockGetSkillsUseCase::new()),
                get_single: Arc::new(MockGetSingleSkillUseCase::new()),
                create: Arc::new(MockCreateSkillUseCase::new()),
                update: Arc::new(MockUpdateSkillUseCase::new()),
                delete: Arc::new(MockDeleteSkillUseCase::new()),
            },
            experience: ExperienceUseCases {
                get_list: Arc::new(MockGetExperiencesUseCase::new()),
                get_single: Arc::new(MockGetSingleExperienceUseCase::new()),
                create: Arc::new(MockCreateExperienceUseCase::new()),
                update: Arc::new(MockUpdateExperienceUseCase::new()),
                delete: Arc::new(MockDeleteExperienceUseCase::new()),
            },
            technology: TechnologyUseCases {
                get_list: Arc::new(MockGetTechnologiesUseCase::new()),
                get_single: Arc::new(MockGetSingleTechnologyUseCase::new()),
                create: Arc::new(MockCreateTechnologyUseCase::new()),
                update: Arc::new(MockUpdateTechnologyUseCase::new()),
                delete: Arc::new(MockDeleteTechnologyUseCase::new()),
            },
            contact: ContactUseCases {
                get_list: Arc::new(MockGetContactMessagesUseCase::new()),
                get_single: Arc::new(MockGetSingleContactMessageUseCase::new()),
                submit: Arc::new(MockSubmitContactMessageUseCase::new()),
                update_status: Arc::new(MockUpdateContactStatusUseCase::new()),
                delete: Arc::new(MockDeleteContactMessageUseCase::new()),
            },
            personal_info: PersonalInfoUseCases {
                get: Arc::new(MockGetPersonalInfoUseCase::new()),
                update: Arc::new(MockUpdatePersonalInfoUseCase::new()),
            },
            seed: Arc::new(MockSeedPortfolioUseCase::new()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_projects(mut self, uc: impl GetProjectsUseCase + Send + Sync + 'static) -> Self {
        self.project.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_project(mut self, uc: impl GetSingleProjectUseCase + Send + Sync + 'static) -> Self {
        self.project.get_single = Arc::new(uc);
        self
    }

    pub fn with_create_project(mut self, uc: impl CreateProjectUseCase + Send + Sync + 'static) -> Self {
        self.project.create = Arc::new(uc);
        self
    }

    pub fn with_update_project(mut self, uc: impl UpdateProjectUseCase + Send + Sync + 'static) -> Self {
        self.project.update = Arc::new(uc);
        self
    }

    pub fn with_set_project_status(mut self, uc: impl SetProjectStatusUseCase + Send + Sync + 'static) -> Self {
        self.project.set_status = Arc::new(uc);
        self
    }

    pub fn with_delete_project(mut self, uc: impl DeleteProjectUseCase + Send + Sync + 'static) -> Self {
        self.project.delete = Arc::new(uc);
        self
    }

    pub fn with_get_skills(mut self, uc: impl GetSkillsUseCase + Send + Sync + 'static) -> Self {
        self.skill.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_skill(mut self, uc: impl GetSingleSkillUseCase + Send + Sync + 'static) -> Self {
        self.skill.get_single = Arc::new(uc);
        self
    }

    pub fn with_create_skill(mut self, uc: impl CreateSkillUseCase + Send + Sync + 'static) -> Self {
        self.skill.create = Arc::new(uc);
        self
    }

    pub fn with_update_skill(mut self, uc: impl UpdateSkillUseCase + Send + Sync + 'static) -> Self {
        self.skill.update = Arc::new(uc);
        self
    }

    pub fn with_delete_skill(mut self, uc: impl DeleteSkillUseCase + Send + Sync + 'static) -> Self {
        self.skill.delete = Arc::new(uc);
        self
    }

    pub fn with_get_experiences(mut self, uc: impl GetExperiencesUseCase + Send + Sync + 'static) -> Self {
        self.experience.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_experience(mut self, uc: impl GetSingleExperienceUseCase + Send + Sync + 'static) -> Self {
        self.experience.get_single = Arc::new(uc);
        self
    }

    pub fn with_create_experience(mut self, uc: impl CreateExperienceUseCase + Send + Sync + 'static) -> Self {
        self.experience.create = Arc::new(uc);
        self
    }

    pub fn with_update_experience(mut self, uc: impl UpdateExperienceUseCase + Send + Sync + 'static) -> Self {
        self.experience.update = Arc::new(uc);
        self
    }

    pub fn with_delete_experience(mut self, uc: impl DeleteExperienceUseCase + Send + Sync + 'static) -> Self {
        self.experience.delete = Arc::new(uc);
        self
    }

    pub fn with_get_technologies(mut self, uc: impl GetTechnologiesUseCase + Send + Sync + 'static) -> Self {
        self.technology.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_technology(mut self, uc: impl GetSingleTechnologyUseCase + Send + Sync + 'static) -> Self {
        self.technology.get_single = Arc::new(uc);
        self
    }

    pub fn with_create_technology(mut self, uc: impl CreateTechnologyUseCase + Send + Sync + 'static) -> Self {
        self.technology.create = Arc::new(uc);
        self
    }

    pub fn with_update_technology(mut self, uc: impl UpdateTechnologyUseCase + Send + Sync + 'static) -> Self {
        self.technology.update = Arc::new(uc);
        self
    }

    pub fn with_delete_technology(mut self, uc: impl DeleteTechnologyUseCase + Send + Sync + 'static) -> Self {
        self.technology.delete = Arc::new(uc);
        self
    }

    pub fn with_get_contact_messages(mut self, uc: impl GetContactMessagesUseCase + Send + Sync + 'static) -> Self {
        self.contact.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_contact_message(mut self, uc: impl GetSingleContactMessageUseCase + Send + Sync + 'static) -> Self {
        self.contact.get_single = Arc::new(uc);
        self
    }

    pub fn with_submit_contact_message(mut self, uc: impl SubmitContactMessageUseCase + Send + Sync + 'static) -> Self {
        self.contact.submit = Arc::new(uc);
        self
    }

    pub fn with_update_contact_status(mut self, uc: impl UpdateContactStatusUseCase + Send + Sync + 'static) -> Self {
        self.contact.update_status = Arc::new(uc);
        self
    }

    pub fn with_delete_contact_message(mut self, uc: impl DeleteContactMessageUseCase + Send + Sync + 'static) -> Self {
        self.contact.delete = Arc::new(uc);
        self
    }

    pub fn with_get_personal_info(mut self, uc: impl GetPersonalInfoUseCase + Send + Sync + 'static) -> Self {
        self.personal_info.get = Arc::new(uc);
        self
    }

    pub fn with_update_personal_info(mut self, uc: impl UpdatePersonalInfoUseCase + Send + Sync + 'static) -> Self {
        self.personal_info.update = Arc::new(uc);
        self
    }

    pub fn with_seed(mut self, uc: impl SeedPortfolioUseCase + Send + Sync + 'static) -> Self {
        self.seed = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            project: self.project,
            skill: self.skill,
            experience: self.experience,
            technology: self.technology,
            contact: self.contact,
            personal_info: self.personal_info,
            seed: self.seed,
        })
    }
}
