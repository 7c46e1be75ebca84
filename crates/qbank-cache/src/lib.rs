//! Client-side quiz session caching.
//!
//! A session view asks the cache first and only fetches from the backend on
//! a miss. Entries expire after a fixed TTL and the cache never grows past
//! its configured capacity.

pub mod clock;
pub mod session_cache;

pub use clock::{Clock, SystemClock};
pub use session_cache::{
    CacheConfig, CacheStatsSnapshot, CachedSession, SessionCache, SessionId,
};
