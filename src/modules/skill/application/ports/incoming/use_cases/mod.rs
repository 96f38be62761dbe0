mod create_skill;
mod delete_skill;
mod get_single_skill;
mod get_skills;
mod update_skill;

pub use create_skill::{CreateSkillError, CreateSkillUseCase};
pub use delete_skill::{DeleteSkillError, DeleteSkillUseCase};
pub use get_single_skill::{GetSingleSkillError, GetSingleSkillUseCase};
pub use get_skills::{GetSkillsError, GetSkillsUseCase};
pub use update_skill::{UpdateSkillError, UpdateSkillUseCase};

#[cfg(test)]
pub use create_skill::MockCreateSkillUseCase;
#[cfg(test)]
pub use delete_skill::MockDeleteSkillUseCase;
#[cfg(test)]
pub use get_single_skill::MockGetSingleSkillUseCase;
#[cfg(test)]
pub use get_skills::MockGetSkillsUseCase;
#[cfg(test)]
pub use update_skill::MockUpdateSkillUseCase;
