//! evictkit: in-memory key-value caches with interchangeable eviction
//! policies.
//!
//! Five engines (FIFO, LRU, LRU+TTL, LFU, ARC) behind one
//! [`Cache`](traits::Cache) contract, so call sites pick a policy without
//! changing shape. See `DESIGN.md` for internal architecture.

pub mod bounds;
pub mod clock;
pub mod ds;
pub mod error;
pub mod ops;
pub mod policy;
pub mod prelude;
pub mod traits;
