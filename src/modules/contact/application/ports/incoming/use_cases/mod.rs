mod delete_contact_message;
mod get_contact_messages;
mod get_single_contact_message;
mod submit_contact_message;
mod update_contact_status;

pub use delete_contact_message::{DeleteContactMessageError, DeleteContactMessageUseCase};
pub use get_contact_messages::{GetContactMessagesError, GetContactMessagesUseCase};
pub use get_single_contact_message::{
    GetSingleContactMessageError, GetSingleContactMessageUseCase,
};
pub use submit_contact_message::{SubmitContactMessageError, SubmitContactMessageUseCase};
pub use update_contact_status::{UpdateContactStatusError, UpdateContactStatusUseCase};

#[cfg(test)]
pub use delete_contact_message::MockDeleteContactMessageUseCase;
#[cfg(test)]
pub use get_contact_messages::MockGetContactMessagesUseCase;
#[cfg(test)]
pub use get_single_contact_message::MockGetSingleContactMessageUseCase;
#[cfg(test)]
pub use submit_contact_message::MockSubmitContactMessageUseCase;
#[cfg(test)]
pub use update_contact_status::MockUpdateContactStatusUseCase;
