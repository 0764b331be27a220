pub mod aggregate;

pub use aggregate::{Worker, WorkerDto, WorkerId, WORKER_ROLES};
