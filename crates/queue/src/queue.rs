//! Generic FIFO queue over a standard first-in-first-out container
//!
//! Strict FIFO: elements are dequeued in exactly the order they were
//! enqueued. No reordering, no deduplication, no capacity bound.

use std::collections::VecDeque;
use std::fmt;

use crate::error::{QueueError, Result};

/// Insertion-ordered queue of elements waiting to be served.
///
/// `T` only needs a textual representation for the diagnostic
/// notifications emitted on mutation; the notifications carry no
/// functional contract.
pub struct WashQueue<T: fmt::Display> {
    items: VecDeque<T>,
}

impl<T: fmt::Display> WashQueue<T> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Add an item at the tail of the queue.
    ///
    /// Never fails; the queue has no capacity bound. The prior order
    /// of existing elements is unchanged.
    pub fn enqueue(&mut self, item: T) {
        tracing::info!("Added car to queue: {}", item);
        self.items.push_back(item);
    }

    /// Remove and return the item at the head of the queue.
    ///
    /// Returns `QueueError::Empty` if the queue has no elements; the
    /// queue remains valid and empty afterwards.
    pub fn dequeue(&mut self) -> Result<T> {
        let item = self.items.pop_front().ok_or(QueueError::Empty)?;
        tracing::info!("Car served and removed from queue: {}", item);
        Ok(item)
    }

    /// Look at the head of the queue without removing it
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Current number of items in the queue
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: fmt::Display> Default for WashQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> Drop for WashQueue<T> {
    fn drop(&mut self) {
        // Informational only; remaining items are simply discarded
        tracing::debug!("Queue dropped with {} cars remaining", self.items.len());
    }
}
