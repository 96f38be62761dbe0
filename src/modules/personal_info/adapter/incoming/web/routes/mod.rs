mod get_personal_info;
mod update_personal_info;

pub use get_personal_info::*;
pub use update_personal_info::*;
