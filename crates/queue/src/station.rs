//! Wash station dispatch engine
//!
//! Maps shell-level operations onto the core queue. A failed serve on
//! an empty queue surfaces as an error response, never as a panic;
//! the queue stays valid afterwards.

use crate::queue::WashQueue;
use crate::types::{QueueOperation, QueueResponse};

/// Single-server wash station with one FIFO queue of car names
pub struct WashStation {
    queue: WashQueue<String>,
}

impl WashStation {
    /// Create a station with an empty queue
    pub fn new() -> Self {
        Self {
            queue: WashQueue::new(),
        }
    }

    /// Apply an operation to the queue and return its response
    pub fn apply_operation(&mut self, op: QueueOperation) -> QueueResponse {
        match op {
            QueueOperation::Add { car } => {
                self.queue.enqueue(car.clone());
                QueueResponse::Added { car }
            }
            QueueOperation::Serve => match self.queue.dequeue() {
                Ok(car) => QueueResponse::Served { car },
                Err(e) => QueueResponse::Error(e.to_string()),
            },
            QueueOperation::Size => QueueResponse::Size(self.queue.size()),
            QueueOperation::Peek => QueueResponse::Peeked(self.queue.peek().cloned()),
            QueueOperation::IsEmpty => QueueResponse::IsEmpty(self.queue.is_empty()),
        }
    }
}

impl Default for WashStation {
    fn default() -> Self {
        Self::new()
    }
}
