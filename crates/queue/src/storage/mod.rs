//! Storage layer for queue chains
//!
//! The arena owns the nodes; the chain threads them into a queue. Nothing
//! outside this module touches a `NodeId`.

pub(crate) mod arena;
pub mod chain;

pub use chain::{Iter, TextQueue};
