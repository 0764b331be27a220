pub mod edit_modal;
pub mod list;

pub use edit_modal::EditVehicleModal;
pub use list::VehicleList;
