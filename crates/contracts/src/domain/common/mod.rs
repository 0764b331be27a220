//! Common types shared by all workshop aggregates

pub mod aggregate_id;
pub mod error;

pub use aggregate_id::AggregateId;
pub use error::StoreError;
