//! Operation and response types for the dispatch layer

pub mod operation;
pub mod response;

pub use operation::{OperationType, QueueOperation};
pub use response::QueueResponse;
