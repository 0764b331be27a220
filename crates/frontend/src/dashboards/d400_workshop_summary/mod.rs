pub mod summary;
pub mod ui;

pub use summary::WorkshopSummary;
pub use ui::WorkshopSummaryDashboard;
