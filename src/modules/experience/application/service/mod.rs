mod create_experience_service;
mod delete_experience_service;
mod get_experiences_service;
mod get_single_experience_service;
mod update_experience_service;

pub use create_experience_service::CreateExperienceService;
pub use delete_experience_service::DeleteExperienceService;
pub use get_experiences_service::GetExperiencesService;
pub use get_single_experience_service::GetSingleExperienceService;
pub use update_experience_service::UpdateExperienceService;
