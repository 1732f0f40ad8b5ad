//! Queue response types

use crate::handle::QueueId;
use serde::{Deserialize, Serialize};

/// Response types for queue operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueueResponse {
    /// Queue created; the handle names it from now on
    Created(QueueId),

    /// Queue destroyed
    Destroyed,

    /// Element inserted
    Inserted,

    /// Head element removed; the value is bounded by the operation's
    /// capture capacity and `None` when the caller supplied no buffer
    Removed(Option<String>),

    /// Element count
    Size(usize),

    /// Copy of the head value, `None` on an empty queue
    Peeked(Option<String>),

    /// Queue cleared
    Cleared,

    /// Queue reversed
    Reversed,

    /// Queue sorted
    Sorted,

    /// Operation failed
    Error(String),
}

impl QueueResponse {
    /// Serialize for hosts that move responses as bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        serde_json::to_vec(self).unwrap_or_default()
    }
}
