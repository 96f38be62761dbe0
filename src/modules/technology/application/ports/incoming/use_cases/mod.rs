mod create_technology;
mod delete_technology;
mod get_single_technology;
mod get_technologies;
mod update_technology;

pub use create_technology::{CreateTechnologyError, CreateTechnologyUseCase};
pub use delete_technology::{DeleteTechnologyError, DeleteTechnologyUseCase};
pub use get_single_technology::{GetSingleTechnologyError, GetSingleTechnologyUseCase};
pub use get_technologies::{GetTechnologiesError, GetTechnologiesUseCase};
pub use update_technology::{UpdateTechnologyError, UpdateTechnologyUseCase};

#[cfg(test)]
pub use create_technology::MockCreateTechnologyUseCase;
#[cfg(test)]
pub use delete_technology::MockDeleteTechnologyUseCase;
#[cfg(test)]
pub use get_single_technology::MockGetSingleTechnologyUseCase;
#[cfg(test)]
pub use get_technologies::MockGetTechnologiesUseCase;
#[cfg(test)]
pub use update_technology::MockUpdateTechnologyUseCase;
