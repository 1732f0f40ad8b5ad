//! Type system for the queue engine

pub mod operation;
pub mod response;

pub use operation::{OperationType, QueueOperation};
pub use response::QueueResponse;
