mod create_project;
mod delete_project;
mod get_projects;
mod get_single_project;
mod set_project_status;
mod update_project;

pub use create_project::{CreateProjectError, CreateProjectUseCase};
pub use delete_project::{DeleteProjectError, DeleteProjectUseCase};
pub use get_projects::{GetProjectsError, GetProjectsUseCase};
pub use get_single_project::{GetSingleProjectError, GetSingleProjectUseCase};
pub use set_project_status::{SetProjectStatusError, SetProjectStatusUseCase};
pub use update_project::{UpdateProjectError, UpdateProjectUseCase};

#[cfg(test)]
pub use create_project::MockCreateProjectUseCase;
#[cfg(test)]
pub use delete_project::MockDeleteProjectUseCase;
#[cfg(test)]
pub use get_projects::MockGetProjectsUseCase;
#[cfg(test)]
pub use get_single_project::MockGetSingleProjectUseCase;
#[cfg(test)]
pub use set_project_status::MockSetProjectStatusUseCase;
#[cfg(test)]
pub use update_project::MockUpdateProjectUseCase;
