pub mod edit_modal;
pub mod fields;
pub mod list;

pub use edit_modal::{EditExpenseModal, NewExpenseModal};
pub use list::ExpenseList;
