mod create_skill;
mod delete_skill;
mod get_single_skill;
mod get_skills;
mod update_skill;

pub use create_skill::*;
pub use delete_skill::*;
pub use get_single_skill::*;
pub use get_skills::*;
pub use update_skill::*;
