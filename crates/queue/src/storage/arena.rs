//! Node arena for queue chains
//!
//! Every node of a queue lives in one arena: a slot vector indexed by
//! `NodeId`, with a free list threaded through the vacant slots so removal
//! never shrinks the vector and insertion reuses freed slots in O(1).
//! Handing out indices instead of pointers keeps the chain rewiring in
//! `chain.rs` free of any dangling-link or double-free hazard: a released
//! slot is vacant, and the arena owns every live node outright.
//!
//! All allocation is fallible. Slot growth goes through
//! `Vec::try_reserve` and value copies through `String::try_reserve_exact`,
//! so running out of memory surfaces as `QueueError::AllocationFailure`
//! instead of aborting the process.

use crate::error::Result;

/// Index of a node inside its arena
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

impl NodeId {
    fn index(self) -> usize {
        self.0
    }
}

/// A single chain element: one owned string and the link to its successor
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) value: String,
    pub(crate) next: Option<NodeId>,
}

/// One arena slot. Vacant slots thread the free list through `next_free`.
#[derive(Debug)]
enum Slot {
    Occupied(Node),
    Vacant { next_free: Option<NodeId> },
}

/// Slot vector owning every node of one queue
#[derive(Debug)]
pub(crate) struct NodeArena {
    slots: Vec<Slot>,
    free_head: Option<NodeId>,
    live: usize,
}

impl NodeArena {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            live: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            live: 0,
        }
    }

    /// Allocate a node holding an independent copy of `text`.
    ///
    /// The string copy and any slot growth both happen before the arena is
    /// touched, so a failed allocation leaves no trace.
    pub(crate) fn allocate(&mut self, text: &str, next: Option<NodeId>) -> Result<NodeId> {
        let value = copy_text(text)?;
        let node = Node { value, next };

        let id = match self.free_head {
            Some(id) => {
                let slot = std::mem::replace(&mut self.slots[id.index()], Slot::Occupied(node));
                match slot {
                    Slot::Vacant { next_free } => self.free_head = next_free,
                    Slot::Occupied(_) => unreachable!("free list points at a live slot"),
                }
                id
            }
            None => {
                self.slots.try_reserve(1)?;
                let id = NodeId(self.slots.len());
                self.slots.push(Slot::Occupied(node));
                id
            }
        };

        self.live += 1;
        Ok(id)
    }

    /// Return a slot to the free list, handing back the node's owned value
    pub(crate) fn release(&mut self, id: NodeId) -> String {
        let slot = std::mem::replace(
            &mut self.slots[id.index()],
            Slot::Vacant {
                next_free: self.free_head,
            },
        );
        match slot {
            Slot::Occupied(node) => {
                self.free_head = Some(id);
                self.live -= 1;
                node.value
            }
            Slot::Vacant { .. } => unreachable!("released a vacant slot"),
        }
    }

    pub(crate) fn get(&self, id: NodeId) -> &Node {
        match &self.slots[id.index()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("dereferenced a vacant slot"),
        }
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node {
        match &mut self.slots[id.index()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("dereferenced a vacant slot"),
        }
    }

    /// Number of live nodes
    pub(crate) fn live(&self) -> usize {
        self.live
    }
}

/// Copy the caller's string into freshly reserved storage.
///
/// The queue never aliases the caller's buffer; every element is an
/// independent copy made at insertion time.
fn copy_text(text: &str) -> Result<String> {
    let mut value = String::new();
    value.try_reserve_exact(text.len())?;
    value.push_str(text);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_and_read_back() {
        let mut arena = NodeArena::new();

        let id = arena.allocate("hello", None).unwrap();
        assert_eq!(arena.get(id).value, "hello");
        assert_eq!(arena.get(id).next, None);
        assert_eq!(arena.live(), 1);
    }

    #[test]
    fn test_allocate_links_successor() {
        let mut arena = NodeArena::new();

        let first = arena.allocate("first", None).unwrap();
        let second = arena.allocate("second", Some(first)).unwrap();

        assert_eq!(arena.get(second).next, Some(first));
    }

    #[test]
    fn test_release_returns_owned_value() {
        let mut arena = NodeArena::new();

        let id = arena.allocate("payload", None).unwrap();
        let value = arena.release(id);

        assert_eq!(value, "payload");
        assert_eq!(arena.live(), 0);
    }

    #[test]
    fn test_released_slot_is_reused() {
        let mut arena = NodeArena::new();

        let a = arena.allocate("a", None).unwrap();
        let _b = arena.allocate("b", None).unwrap();

        arena.release(a);
        let c = arena.allocate("c", None).unwrap();

        // The freed slot comes back before the vector grows
        assert_eq!(c, a);
        assert_eq!(arena.get(c).value, "c");
        assert_eq!(arena.live(), 2);
    }

    #[test]
    fn test_free_list_survives_multiple_cycles() {
        let mut arena = NodeArena::new();

        let ids: Vec<_> = (0..4)
            .map(|i| arena.allocate(&i.to_string(), None).unwrap())
            .collect();
        for &id in &ids {
            arena.release(id);
        }
        assert_eq!(arena.live(), 0);

        for i in 0..4 {
            arena.allocate(&format!("again-{i}"), None).unwrap();
        }
        assert_eq!(arena.live(), 4);
    }

    #[test]
    fn test_copy_is_independent_of_source() {
        let mut arena = NodeArena::new();

        let source = String::from("original");
        let id = arena.allocate(&source, None).unwrap();
        drop(source);

        assert_eq!(arena.get(id).value, "original");
    }
}
