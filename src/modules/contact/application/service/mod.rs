mod delete_contact_message_service;
mod get_contact_messages_service;
mod get_single_contact_message_service;
mod submit_contact_message_service;
mod update_contact_status_service;

pub use delete_contact_message_service::DeleteContactMessageService;
pub use get_contact_messages_service::GetContactMessagesService;
pub use get_single_contact_message_service::GetSingleContactMessageService;
pub use submit_contact_message_service::SubmitContactMessageService;
pub use update_contact_status_service::UpdateContactStatusService;
