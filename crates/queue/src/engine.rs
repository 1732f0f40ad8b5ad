//! Queue engine: handle resolution and operation dispatch
//!
//! The engine owns every live queue, keyed by `QueueId`. Hosts either call
//! the typed methods directly or send `QueueOperation` values through
//! [`QueueEngine::apply`], which folds failures into
//! `QueueResponse::Error` so responses stay plain data.
//!
//! Handles stand in for the nullable pointer of pointer-based queue APIs:
//! an operation on a handle that was never created, or whose queue has
//! been destroyed, fails with `InvalidHandle` instead of touching freed
//! memory. Destroying a queue twice reports the same error.

use crate::config::QueueConfig;
use crate::error::{QueueError, Result};
use crate::handle::QueueId;
use crate::storage::TextQueue;
use crate::types::{QueueOperation, QueueResponse};
use std::collections::HashMap;

/// Engine owning a registry of queues
#[derive(Debug)]
pub struct QueueEngine {
    /// Live queues by handle
    queues: HashMap<QueueId, TextQueue>,

    /// Configuration applied to every queue this engine creates
    config: QueueConfig,
}

impl QueueEngine {
    /// Create an engine with default configuration
    pub fn new() -> Self {
        Self::with_config(QueueConfig::default())
    }

    /// Create an engine with custom configuration
    pub fn with_config(config: QueueConfig) -> Self {
        Self {
            queues: HashMap::new(),
            config,
        }
    }

    /// Create a new empty queue and return its handle
    pub fn create(&mut self) -> Result<QueueId> {
        self.queues.try_reserve(1)?;
        let id = QueueId::new();
        self.queues.insert(id, TextQueue::with_config(&self.config));
        tracing::debug!("Created queue {}", id);
        Ok(id)
    }

    /// Destroy a queue. Dropping it releases the arena and every owned
    /// string in one pass.
    pub fn destroy(&mut self, queue: QueueId) -> Result<()> {
        self.queues
            .remove(&queue)
            .ok_or(QueueError::InvalidHandle(queue))?;
        tracing::debug!("Destroyed queue {}", queue);
        Ok(())
    }

    /// Borrow a queue by handle
    pub fn queue(&self, queue: QueueId) -> Result<&TextQueue> {
        self.queues
            .get(&queue)
            .ok_or(QueueError::InvalidHandle(queue))
    }

    fn queue_mut(&mut self, queue: QueueId) -> Result<&mut TextQueue> {
        self.queues
            .get_mut(&queue)
            .ok_or(QueueError::InvalidHandle(queue))
    }

    /// Insert a copy of `text` at the head
    pub fn insert_head(&mut self, queue: QueueId, text: &str) -> Result<()> {
        self.queue_mut(queue)?.push_front(text)
    }

    /// Insert a copy of `text` at the tail
    pub fn insert_tail(&mut self, queue: QueueId, text: &str) -> Result<()> {
        self.queue_mut(queue)?.push_back(text)
    }

    /// Remove the head element.
    ///
    /// `capture` models the caller's output buffer: `None` means no buffer
    /// was supplied and the value is dropped; `Some(capacity)` returns at
    /// most `capacity - 1` bytes of the value, truncated on a character
    /// boundary. Truncation is defined behavior, not an error, and the
    /// element is removed either way.
    pub fn remove_head(&mut self, queue: QueueId, capture: Option<usize>) -> Result<Option<String>> {
        let value = self.queue_mut(queue)?.pop_front()?;
        Ok(capture.and_then(|capacity| clamp_to_capacity(&value, capacity)))
    }

    /// Element count, O(1)
    pub fn size(&self, queue: QueueId) -> Result<usize> {
        Ok(self.queue(queue)?.len())
    }

    /// Copy of the head value without removing it
    pub fn peek(&self, queue: QueueId) -> Result<Option<String>> {
        Ok(self.queue(queue)?.front().map(str::to_string))
    }

    /// Remove every element from a queue
    pub fn clear(&mut self, queue: QueueId) -> Result<()> {
        self.queue_mut(queue)?.clear();
        Ok(())
    }

    /// Reverse a queue in place
    pub fn reverse(&mut self, queue: QueueId) -> Result<()> {
        self.queue_mut(queue)?.reverse();
        Ok(())
    }

    /// Sort a queue in place, ascending and byte-wise
    pub fn sort(&mut self, queue: QueueId) -> Result<()> {
        self.queue_mut(queue)?.sort();
        Ok(())
    }

    /// Apply one operation, folding errors into the response
    pub fn apply(&mut self, operation: QueueOperation) -> QueueResponse {
        tracing::debug!("Applying operation: {:?}", operation);

        let result = match operation {
            QueueOperation::Create => self.create().map(QueueResponse::Created),
            QueueOperation::Destroy { queue } => {
                self.destroy(queue).map(|()| QueueResponse::Destroyed)
            }
            QueueOperation::InsertHead { queue, text } => self
                .insert_head(queue, &text)
                .map(|()| QueueResponse::Inserted),
            QueueOperation::InsertTail { queue, text } => self
                .insert_tail(queue, &text)
                .map(|()| QueueResponse::Inserted),
            QueueOperation::RemoveHead { queue, capture } => {
                self.remove_head(queue, capture).map(QueueResponse::Removed)
            }
            QueueOperation::Size { queue } => self.size(queue).map(QueueResponse::Size),
            QueueOperation::Peek { queue } => self.peek(queue).map(QueueResponse::Peeked),
            QueueOperation::Clear { queue } => self.clear(queue).map(|()| QueueResponse::Cleared),
            QueueOperation::Reverse { queue } => {
                self.reverse(queue).map(|()| QueueResponse::Reversed)
            }
            QueueOperation::Sort { queue } => self.sort(queue).map(|()| QueueResponse::Sorted),
        };

        result.unwrap_or_else(|e| {
            tracing::warn!("Operation failed: {}", e);
            QueueResponse::Error(e.to_string())
        })
    }
}

impl Default for QueueEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Bound `value` to a caller buffer of `capacity` bytes.
///
/// Mirrors the classic C contract: at most `capacity - 1` bytes are
/// copied (room for the terminator), and a zero capacity produces no
/// output at all. A cut that would split a UTF-8 character backs up to
/// the previous boundary.
fn clamp_to_capacity(value: &str, capacity: usize) -> Option<String> {
    if capacity == 0 {
        return None;
    }

    let mut limit = capacity - 1;
    if limit >= value.len() {
        return Some(value.to_string());
    }
    while !value.is_char_boundary(limit) {
        limit -= 1;
    }
    Some(value[..limit].to_string())
}
