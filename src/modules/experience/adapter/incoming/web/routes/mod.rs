mod create_experience;
mod delete_experience;
mod get_experiences;
mod get_single_experience;
mod update_experience;

pub use create_experience::*;
pub use delete_experience::*;
pub use get_experiences::*;
pub use get_single_experience::*;
pub use update_experience::*;
