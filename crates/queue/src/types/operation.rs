//! Queue operation types
//!
//! This module defines the commands the interactive shell can
//! dispatch against a wash station.

use serde::{Deserialize, Serialize};

/// Type of operation - read or write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationType {
    /// Read operation - does not modify state
    Read,
    /// Write operation - modifies state
    Write,
}

/// Queue operation types that can be dispatched by the shell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueueOperation {
    /// Add a car to the back of the queue
    Add { car: String },

    /// Serve the car at the front of the queue
    Serve,

    /// Get the number of cars in the queue
    Size,

    /// Peek at the front car without removing it
    Peek,

    /// Check if the queue is empty
    IsEmpty,
}

impl QueueOperation {
    /// Get the type of this operation (read or write)
    pub fn operation_type(&self) -> OperationType {
        match self {
            QueueOperation::Add { .. } => OperationType::Write,
            QueueOperation::Serve => OperationType::Write,
            QueueOperation::Size => OperationType::Read,
            QueueOperation::Peek => OperationType::Read,
            QueueOperation::IsEmpty => OperationType::Read,
        }
    }

    /// Convert this operation to a JSON value for diagnostics
    pub fn as_json_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_types() {
        let add = QueueOperation::Add {
            car: "Tesla Model 3".to_string(),
        };
        assert_eq!(add.operation_type(), OperationType::Write);
        assert_eq!(QueueOperation::Serve.operation_type(), OperationType::Write);
        assert_eq!(QueueOperation::Size.operation_type(), OperationType::Read);
        assert_eq!(QueueOperation::Peek.operation_type(), OperationType::Read);
        assert_eq!(
            QueueOperation::IsEmpty.operation_type(),
            OperationType::Read
        );
    }

    #[test]
    fn test_operation_as_json() {
        let op = QueueOperation::Add {
            car: "BMW X5".to_string(),
        };
        assert!(op.as_json_value().is_object());
    }

    #[test]
    fn test_operation_clone_and_eq() {
        let op1 = QueueOperation::Add {
            car: "Ford Mustang".to_string(),
        };
        let op2 = op1.clone();
        assert_eq!(op1, op2);
    }
}
