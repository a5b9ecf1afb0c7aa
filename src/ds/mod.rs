//! Internal data structures shared by the eviction engines.
//!
//! - [`slot_arena`]: slab allocator with stable `SlotId` handles
//! - [`intrusive_list`]: arena-backed doubly linked list (LFU order list)
//! - [`ordered_map`]: hash index + insertion-ordered list (LRU, FIFO, ARC T1/T2)
//! - [`ghost_set`]: key-only insertion-ordered set (ARC B1/B2)

pub mod ghost_set;
pub mod intrusive_list;
pub mod ordered_map;
pub mod slot_arena;

pub use ghost_set::GhostSet;
pub use intrusive_list::IntrusiveList;
pub use ordered_map::OrderedMap;
pub use slot_arena::{SlotArena, SlotId};
