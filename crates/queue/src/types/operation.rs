//! Queue operation types
//!
//! This module defines the operations a host can send to the engine.

use crate::handle::QueueId;
use serde::{Deserialize, Serialize};

/// Whether an operation reads or mutates queue state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationType {
    /// Read operation - does not modify state
    Read,
    /// Write operation - modifies state
    Write,
}

/// Operations the engine accepts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueueOperation {
    /// Create a new empty queue and hand back its handle
    Create,

    /// Destroy a queue, releasing every node it owns
    Destroy { queue: QueueId },

    /// Insert a copy of `text` at the head
    InsertHead { queue: QueueId, text: String },

    /// Insert a copy of `text` at the tail
    InsertTail { queue: QueueId, text: String },

    /// Remove the head element. `capture` is the byte capacity of the
    /// caller's buffer: `None` discards the value, `Some(n)` returns at
    /// most `n - 1` bytes of it (so `Some(0)` returns nothing).
    RemoveHead {
        queue: QueueId,
        capture: Option<usize>,
    },

    /// Number of elements, from the cached count
    Size { queue: QueueId },

    /// Copy of the head value without removing it
    Peek { queue: QueueId },

    /// Remove every element
    Clear { queue: QueueId },

    /// Reverse the queue in place
    Reverse { queue: QueueId },

    /// Sort the queue in place, ascending and byte-wise
    Sort { queue: QueueId },
}

impl QueueOperation {
    /// Classify this operation as a read or a write
    pub fn operation_type(&self) -> OperationType {
        match self {
            QueueOperation::Size { .. } | QueueOperation::Peek { .. } => OperationType::Read,
            QueueOperation::Create
            | QueueOperation::Destroy { .. }
            | QueueOperation::InsertHead { .. }
            | QueueOperation::InsertTail { .. }
            | QueueOperation::RemoveHead { .. }
            | QueueOperation::Clear { .. }
            | QueueOperation::Reverse { .. }
            | QueueOperation::Sort { .. } => OperationType::Write,
        }
    }
}
