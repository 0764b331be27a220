pub mod a001_client;
pub mod a002_vehicle;
pub mod a003_worker;
pub mod a004_expense;
pub mod a005_service_order;
pub mod common;
