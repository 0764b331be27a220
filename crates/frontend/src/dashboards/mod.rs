pub mod d400_workshop_summary;

pub use d400_workshop_summary::WorkshopSummaryDashboard;
