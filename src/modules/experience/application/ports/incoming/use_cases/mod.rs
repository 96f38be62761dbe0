mod create_experience;
mod delete_experience;
mod get_experiences;
mod get_single_experience;
mod update_experience;

pub use create_experience::{CreateExperienceError, CreateExperienceUseCase};
pub use delete_experience::{DeleteExperienceError, DeleteExperienceUseCase};
pub use get_experiences::{GetExperiencesError, GetExperiencesUseCase};
pub use get_single_experience::{GetSingleExperienceError, GetSingleExperienceUseCase};
pub use update_experience::{UpdateExperienceError, UpdateExperienceUseCase};

#[cfg(test)]
pub use create_experience::MockCreateExperienceUseCase;
#[cfg(test)]
pub use delete_experience::MockDeleteExperienceUseCase;
#[cfg(test)]
pub use get_experiences::MockGetExperiencesUseCase;
#[cfg(test)]
pub use get_single_experience::MockGetSingleExperienceUseCase;
#[cfg(test)]
pub use update_experience::MockUpdateExperienceUseCase;
