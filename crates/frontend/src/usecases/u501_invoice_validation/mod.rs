pub mod history;
pub mod modal;

pub use history::InvoiceHistory;
pub use modal::{confirm_invoice_with, ConfirmInvoice, InvoiceValidationModal};
