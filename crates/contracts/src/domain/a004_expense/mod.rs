pub mod aggregate;
pub mod status;

pub use aggregate::{Expense, ExpenseDto, ExpenseId, EXPENSE_CATEGORIES};
pub use status::{derive_status, ExpenseStatus};
