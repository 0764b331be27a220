pub mod list;
pub mod worker_modal;

pub use list::WorkerList;
pub use worker_modal::WorkerModal;
