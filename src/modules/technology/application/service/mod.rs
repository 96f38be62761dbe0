mod create_technology_service;
mod delete_technology_service;
mod get_single_technology_service;
mod get_technologies_service;
mod update_technology_service;

pub use create_technology_service::CreateTechnologyService;
pub use delete_technology_service::DeleteTechnologyService;
pub use get_single_technology_service::GetSingleTechnologyService;
pub use get_technologies_service::GetTechnologiesService;
pub use update_technology_service::UpdateTechnologyService;
