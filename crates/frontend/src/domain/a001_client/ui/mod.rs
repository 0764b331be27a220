pub mod edit_modal;
pub mod list;

pub use edit_modal::EditClientModal;
pub use list::ClientList;
