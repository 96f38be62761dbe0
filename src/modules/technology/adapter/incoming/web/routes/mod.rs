mod create_technology;
mod delete_technology;
mod get_single_technology;
mod get_technologies;
mod update_technology;

pub use create_technology::*;
pub use delete_technology::*;
pub use get_single_technology::*;
pub use get_technologies::*;
pub use update_technology::*;
