//! HTTP client side of the portfolio API: a thin resource client plus the
//! stateful controllers the admin dashboard drives.

mod admin_session;
mod error;
mod list_controller;
mod personal_info_controller;
mod resource;
mod resource_client;
mod stats;

pub use admin_session::AdminSession;
pub use error::ClientError;
pub use list_controller::{ListController, ListState};
pub use personal_info_controller::{PersonalInfoController, PersonalInfoState};
pub use resource::Resource;
pub use resource_client::ResourceClient;
pub use stats::DashboardStats;
