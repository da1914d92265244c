//! Queue response types

use serde::{Deserialize, Serialize};

/// Response types for queue operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueueResponse {
    /// Successfully added a car
    Added { car: String },

    /// Successfully served the car at the head
    Served { car: String },

    /// Queue size
    Size(usize),

    /// Peeked at the front car
    Peeked(Option<String>),

    /// Queue empty status
    IsEmpty(bool),

    /// Operation failed
    Error(String),
}
