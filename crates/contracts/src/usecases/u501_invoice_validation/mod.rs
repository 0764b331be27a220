//! Invoice emission: missing fiscal data reported by the emitter and the
//! correction form that resolves it.

pub mod emission;
pub mod form;
pub mod issue;

pub use emission::{apply_corrections, emission_errors};
pub use form::{InvoiceCorrectionForm, InvoiceFormError, ProductCorrection};
pub use issue::InvoiceIssue;
