mod get_personal_info_service;
mod update_personal_info_service;

pub use get_personal_info_service::GetPersonalInfoService;
pub use update_personal_info_service::UpdatePersonalInfoService;
