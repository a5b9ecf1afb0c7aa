pub use crate::bounds::Bound;
pub use crate::clock::{Clock, ManualClock, SystemClock};
pub use crate::error::{ConfigError, KeyNotFound};
pub use crate::policy::arc::ArcCache;
pub use crate::policy::fifo::FifoCache;
pub use crate::policy::lfu::LfuCache;
pub use crate::policy::lru::LruCache;
pub use crate::policy::lru_ttl::LruTtlCache;
pub use crate::traits::Cache;
