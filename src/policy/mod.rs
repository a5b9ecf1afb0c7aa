//! Eviction policy engines.
//!
//! Every engine implements the [`Cache`](crate::traits::Cache) contract and
//! differs only in which entry it sacrifices when full:
//!
//! | Policy | Module | Victim selection | Best for |
//! |--------|--------|------------------|----------|
//! | FIFO   | [`fifo`]    | Oldest insertion                  | Predictable turnover |
//! | LRU    | [`lru`]     | Least recently used               | Temporal locality |
//! | LRU+TTL| [`lru_ttl`] | Expired first, then LRU           | Freshness-sensitive data |
//! | LFU    | [`lfu`]     | Lowest access count               | Frequency-skewed workloads |
//! | ARC    | [`arc`]     | Adaptive recency/frequency split  | Mixed or shifting workloads |
//!
//! All engines are single-threaded and exclusively owned; wrap one in your
//! own synchronization if you need to share it.

pub mod arc;
pub mod fifo;
pub mod lfu;
pub mod lru;
pub mod lru_ttl;

pub use arc::ArcCache;
pub use fifo::FifoCache;
pub use lfu::LfuCache;
pub use lru::LruCache;
pub use lru_ttl::LruTtlCache;
