//! Queue handles
//!
//! A `QueueId` is the engine-level name for one queue. UUIDv7 keeps handles
//! unique across the life of an engine, so a destroyed queue's handle can
//! never accidentally resolve to a later queue.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Handle naming one queue owned by an engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueueId(Uuid);

impl QueueId {
    /// Generate a fresh handle
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create from an existing UUID (for testing/deserialization)
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for QueueId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for QueueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
