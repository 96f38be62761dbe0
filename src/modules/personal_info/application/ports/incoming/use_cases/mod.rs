mod get_personal_info;
mod update_personal_info;

pub use get_personal_info::{GetPersonalInfoError, GetPersonalInfoUseCase};
pub use update_personal_info::{UpdatePersonalInfoError, UpdatePersonalInfoUseCase};

#[cfg(test)]
pub use get_personal_info::MockGetPersonalInfoUseCase;
#[cfg(test)]
pub use update_personal_info::MockUpdatePersonalInfoUseCase;
