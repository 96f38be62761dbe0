mod delete_contact_message;
mod get_contact_messages;
mod get_single_contact_message;
mod submit_contact_message;
mod update_contact_status;

pub use delete_contact_message::*;
pub use get_contact_messages::*;
pub use get_single_contact_message::*;
pub use submit_contact_message::*;
pub use update_contact_status::*;
