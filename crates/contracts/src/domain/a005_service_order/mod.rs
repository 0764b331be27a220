pub mod aggregate;

pub use aggregate::{FiscalProfile, OrderItem, ServiceOrder, ServiceOrderId};
