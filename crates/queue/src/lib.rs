//! FIFO queue core for the car wash console
//!
//! This crate defines:
//! - `WashQueue<T>`: a generic insertion-ordered queue (enqueue at
//!   tail, dequeue from head, size query)
//! - `WashStation`: an operation-dispatch engine over a queue of car
//!   names, used by the interactive shell
//! - Operation and response types for the dispatch layer

pub mod error;
pub mod queue;
pub mod station;
pub mod types;

pub use error::{QueueError, Result};
pub use queue::WashQueue;
pub use station::WashStation;
pub use types::{OperationType, QueueOperation, QueueResponse};
