//! Arena-backed queue of owned strings
//!
//! A singly-linked chain of string-owning nodes with cached head/tail
//! links and an O(1) element count, supporting head/tail insertion, head
//! removal, in-place reversal, and an in-place ascending merge sort.
//! Nodes live in a per-queue arena indexed by private handles, so all the
//! link rewiring is done with indices instead of pointers and teardown is
//! a single sweep.
//!
//! Queues are owned by a [`QueueEngine`] and addressed through [`QueueId`]
//! handles; hosts can also drive the engine with [`QueueOperation`]
//! messages and get [`QueueResponse`] values back.

pub mod config;
pub mod engine;
pub mod error;
pub mod handle;
pub mod storage;
pub mod types;

pub use config::QueueConfig;
pub use engine::QueueEngine;
pub use error::{QueueError, Result};
pub use handle::QueueId;
pub use storage::{Iter, TextQueue};
pub use types::{OperationType, QueueOperation, QueueResponse};
