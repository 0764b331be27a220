pub mod form_modal;
pub mod page_header;
pub mod stat_card;
pub mod ui;

pub use form_modal::FormModal;
pub use page_header::PageHeader;
pub use stat_card::{CardTone, StatCard};
