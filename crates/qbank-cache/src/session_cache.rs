//! Bounded TTL cache for quiz sessions.

use std::collections::{HashMap, VecDeque};

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::clock::{Clock, SystemClock};

/// Backend identifier for a quiz session.
pub type SessionId = i64;

/// Cache tuning knobs.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Hard cap on the number of cached sessions.
    pub max_entries: usize,
    /// Time-to-live of an entry, fixed at insertion and never extended.
    pub ttl: Duration,
    /// Minimum interval between sweeps triggered by [`SessionCache::maybe_sweep`].
    pub sweep_interval: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 10,
            ttl: Duration::minutes(5),
            sweep_interval: Duration::seconds(60),
        }
    }
}

/// A cached session with its bookkeeping.
#[derive(Debug, Clone)]
pub struct CachedSession<T> {
    /// The session payload.
    pub data: T,
    /// When the entry was inserted.
    pub cached_at: DateTime<Utc>,
    /// `cached_at + ttl`; reads never extend it.
    pub expires_at: DateTime<Utc>,
    /// Starts at 1, incremented by every [`SessionCache::update`].
    pub version: u32,
}

/// Point-in-time view of cache statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheStatsSnapshot {
    /// Reads that returned a live entry.
    pub hits: u64,
    /// Reads of an absent id.
    pub misses: u64,
    /// Entries removed because their TTL elapsed (reads and sweeps alike).
    pub expired: u64,
    /// `hits + misses`; expired reads count as neither.
    pub total_requests: u64,
    /// `hits / total_requests * 100`, rounded to 2 decimals; 0 with no
    /// requests.
    pub hit_rate: f64,
    /// Current number of cached entries.
    pub cache_size: usize,
    /// Cached ids in insertion order (oldest first).
    pub cached_session_ids: Vec<SessionId>,
}

/// In-memory, size-bounded, TTL-expiring session cache.
///
/// Single-threaded and synchronous; the cache performs no I/O. On miss the
/// caller fetches from the backend and calls [`set`](Self::set). Eviction is
/// insertion-order (oldest-inserted first), not LRU-by-access, and the hit,
/// miss, and expired counters are monotone for the cache's lifetime.
#[derive(Debug)]
pub struct SessionCache<T, C: Clock = SystemClock> {
    config: CacheConfig,
    clock: C,
    entries: HashMap<SessionId, CachedSession<T>>,
    insertion_order: VecDeque<SessionId>,
    hits: u64,
    misses: u64,
    expired: u64,
    last_sweep: DateTime<Utc>,
}

impl<T> SessionCache<T> {
    /// Cache on the system clock.
    pub fn new(config: CacheConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Cache with the default configuration (10 entries, 5 minute TTL).
    pub fn with_defaults() -> Self {
        Self::new(CacheConfig::default())
    }
}

impl<T, C: Clock> SessionCache<T, C> {
    /// Cache with an explicit clock, for deterministic tests.
    pub fn with_clock(config: CacheConfig, clock: C) -> Self {
        let last_sweep = clock.now();
        Self {
            config,
            clock,
            entries: HashMap::new(),
            insertion_order: VecDeque::new(),
            hits: 0,
            misses: 0,
            expired: 0,
            last_sweep,
        }
    }

    /// Looks up a session.
    ///
    /// Absent ids record a miss. An entry past its TTL records an expiry
    /// (not a miss), is removed, and reads as absent. Live entries record a
    /// hit.
    pub fn get(&mut self, id: SessionId) -> Option<&T> {
        let now = self.clock.now();
        let is_expired = match self.entries.get(&id) {
            None => {
                self.misses += 1;
                return None;
            }
            Some(entry) => now >= entry.expires_at,
        };

        if is_expired {
            self.expired += 1;
            self.remove(id);
            tracing::trace!(session_id = id, "cached session expired on read");
            return None;
        }

        self.hits += 1;
        self.entries.get(&id).map(|entry| &entry.data)
    }

    /// Inserts or replaces a session.
    ///
    /// New ids beyond capacity evict the oldest-inserted entry first.
    /// Replacing an existing id keeps its insertion-order position.
    pub fn set(&mut self, id: SessionId, data: T) {
        let now = self.clock.now();

        if !self.entries.contains_key(&id) {
            if self.entries.len() >= self.config.max_entries
                && let Some(oldest) = self.insertion_order.pop_front()
            {
                self.entries.remove(&oldest);
                tracing::debug!(session_id = oldest, "evicted oldest cached session");
            }
            self.insertion_order.push_back(id);
        }

        self.entries.insert(
            id,
            CachedSession {
                data,
                cached_at: now,
                expires_at: now + self.config.ttl,
                version: 1,
            },
        );
    }

    /// Applies an in-place update to a cached session.
    ///
    /// Unknown ids are a silent no-op (`false`). Updates bump the entry's
    /// version but leave `expires_at` untouched.
    pub fn update(&mut self, id: SessionId, apply: impl FnOnce(&mut T)) -> bool {
        match self.entries.get_mut(&id) {
            Some(entry) => {
                apply(&mut entry.data);
                entry.version += 1;
                true
            }
            None => false,
        }
    }

    /// Removes a single session.
    pub fn invalidate(&mut self, id: SessionId) {
        self.remove(id);
    }

    /// Clears the whole cache (statistics are kept).
    pub fn invalidate_all(&mut self) {
        self.entries.clear();
        self.insertion_order.clear();
    }

    /// True iff the id is cached and not yet expired. No side effects.
    pub fn is_valid(&self, id: SessionId) -> bool {
        self.entries
            .get(&id)
            .is_some_and(|entry| self.clock.now() < entry.expires_at)
    }

    /// Removes every expired entry, counting each into the expired stat.
    ///
    /// Returns the number of entries removed.
    pub fn sweep_expired(&mut self) -> usize {
        let now = self.clock.now();
        let stale: Vec<SessionId> = self
            .entries
            .iter()
            .filter(|(_, entry)| now >= entry.expires_at)
            .map(|(id, _)| *id)
            .collect();

        for id in &stale {
            self.entries.remove(id);
        }
        self.insertion_order
            .retain(|id| self.entries.contains_key(id));

        self.expired += stale.len() as u64;
        self.last_sweep = now;
        if !stale.is_empty() {
            tracing::debug!(removed = stale.len(), "swept expired sessions");
        }
        stale.len()
    }

    /// Runs [`sweep_expired`](Self::sweep_expired) if the sweep interval has
    /// elapsed since the last sweep; otherwise does nothing.
    ///
    /// The consumer calls this from its own tick; dropping the cache is all
    /// the teardown there is.
    pub fn maybe_sweep(&mut self) -> usize {
        if self.clock.now() - self.last_sweep >= self.config.sweep_interval {
            self.sweep_expired()
        } else {
            0
        }
    }

    /// Bookkeeping for a cached entry (timestamps, version). No side
    /// effects.
    pub fn entry(&self, id: SessionId) -> Option<&CachedSession<T>> {
        self.entries.get(&id)
    }

    /// Number of cached sessions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True iff nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of the statistics counters.
    pub fn stats(&self) -> CacheStatsSnapshot {
        let total_requests = self.hits + self.misses;
        let hit_rate = if total_requests == 0 {
            0.0
        } else {
            (self.hits as f64 / total_requests as f64 * 100.0 * 100.0).round() / 100.0
        };
        CacheStatsSnapshot {
            hits: self.hits,
            misses: self.misses,
            expired: self.expired,
            total_requests,
            hit_rate,
            cache_size: self.entries.len(),
            cached_session_ids: self.insertion_order.iter().copied().collect(),
        }
    }

    fn remove(&mut self, id: SessionId) {
        if self.entries.remove(&id).is_some() {
            self.insertion_order.retain(|key| *key != id);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use chrono::TimeZone;

    use super::*;

    /// Test clock whose time is advanced by hand.
    #[derive(Clone)]
    struct ManualClock(Rc<Cell<DateTime<Utc>>>);

    impl ManualClock {
        fn starting_at_epoch() -> Self {
            let start = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
            Self(Rc::new(Cell::new(start)))
        }

        fn advance(&self, by: Duration) {
            self.0.set(self.0.get() + by);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            self.0.get()
        }
    }

    fn test_cache() -> (SessionCache<String, ManualClock>, ManualClock) {
        let clock = ManualClock::starting_at_epoch();
        let cache = SessionCache::with_clock(CacheConfig::default(), clock.clone());
        (cache, clock)
    }

    #[test]
    fn set_then_get_round_trips() {
        let (mut cache, _clock) = test_cache();
        cache.set(5, "session-5".to_string());
        assert_eq!(cache.get(5).map(String::as_str), Some("session-5"));

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.cache_size, 1);
    }

    #[test]
    fn absent_id_is_a_miss() {
        let (mut cache, _clock) = test_cache();
        assert!(cache.get(42).is_none());

        let stats = cache.stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.expired, 0);
    }

    #[test]
    fn expired_read_counts_as_expired_not_miss() {
        let (mut cache, clock) = test_cache();
        cache.set(5, "session-5".to_string());

        clock.advance(Duration::minutes(5));
        assert!(cache.get(5).is_none());

        let stats = cache.stats();
        assert_eq!(stats.expired, 1);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.cache_size, 0);
    }

    #[test]
    fn entry_lives_until_exactly_ttl() {
        let (mut cache, clock) = test_cache();
        cache.set(1, "data".to_string());

        clock.advance(Duration::minutes(5) - Duration::seconds(1));
        assert!(cache.is_valid(1));
        assert!(cache.get(1).is_some());

        clock.advance(Duration::seconds(1));
        assert!(!cache.is_valid(1));
        assert!(cache.get(1).is_none());
    }

    #[test]
    fn capacity_evicts_oldest_inserted() {
        let (mut cache, _clock) = test_cache();
        for id in 0..10 {
            cache.set(id, format!("session-{id}"));
        }
        assert_eq!(cache.len(), 10);

        cache.set(10, "session-10".to_string());
        assert_eq!(cache.len(), 10);
        // Session 0 was the oldest insertion.
        assert!(cache.entry(0).is_none());
        assert!(cache.entry(10).is_some());

        let stats = cache.stats();
        assert_eq!(stats.cached_session_ids.first(), Some(&1));
        assert_eq!(stats.cached_session_ids.last(), Some(&10));
    }

    #[test]
    fn overwriting_does_not_evict() {
        let (mut cache, _clock) = test_cache();
        for id in 0..10 {
            cache.set(id, format!("session-{id}"));
        }
        cache.set(3, "replaced".to_string());

        assert_eq!(cache.len(), 10);
        assert!(cache.entry(0).is_some());
        // Replacement resets the entry's version.
        assert_eq!(cache.entry(3).map(|e| e.version), Some(1));
        // Insertion-order position is kept.
        assert_eq!(cache.stats().cached_session_ids[3], 3);
    }

    #[test]
    fn update_bumps_version_but_not_expiry() {
        let (mut cache, clock) = test_cache();
        cache.set(7, "initial".to_string());
        let expires_at = cache.entry(7).unwrap().expires_at;

        clock.advance(Duration::minutes(2));
        assert!(cache.update(7, |data| data.push_str("-patched")));

        let entry = cache.entry(7).unwrap();
        assert_eq!(entry.data, "initial-patched");
        assert_eq!(entry.version, 2);
        assert_eq!(entry.expires_at, expires_at);
    }

    #[test]
    fn update_of_unknown_id_is_a_silent_noop() {
        let (mut cache, _clock) = test_cache();
        assert!(!cache.update(99, |_| unreachable!("must not run")));
        assert_eq!(cache.stats().total_requests, 0);
    }

    #[test]
    fn invalidate_removes_one_entry() {
        let (mut cache, _clock) = test_cache();
        cache.set(1, "a".to_string());
        cache.set(2, "b".to_string());

        cache.invalidate(1);
        assert!(cache.entry(1).is_none());
        assert!(cache.entry(2).is_some());
        assert_eq!(cache.stats().cached_session_ids, vec![2]);
    }

    #[test]
    fn invalidate_all_clears_entries_but_keeps_stats() {
        let (mut cache, _clock) = test_cache();
        cache.set(1, "a".to_string());
        cache.get(1);
        cache.get(2);

        cache.invalidate_all();
        assert!(cache.is_empty());

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.cache_size, 0);
    }

    #[test]
    fn sweep_removes_all_expired_entries() {
        let (mut cache, clock) = test_cache();
        cache.set(1, "a".to_string());
        cache.set(2, "b".to_string());
        clock.advance(Duration::minutes(3));
        cache.set(3, "c".to_string());

        clock.advance(Duration::minutes(3));
        // Sessions 1 and 2 are 6 minutes old, session 3 only 3.
        let removed = cache.sweep_expired();
        assert_eq!(removed, 2);

        let stats = cache.stats();
        assert_eq!(stats.expired, 2);
        assert_eq!(stats.cache_size, 1);
        assert_eq!(stats.cached_session_ids, vec![3]);
    }

    #[test]
    fn maybe_sweep_respects_interval() {
        let (mut cache, clock) = test_cache();
        cache.set(1, "a".to_string());

        clock.advance(Duration::seconds(30));
        assert_eq!(cache.maybe_sweep(), 0);

        clock.advance(Duration::minutes(6));
        assert_eq!(cache.maybe_sweep(), 1);

        // Interval restarts after a sweep.
        clock.advance(Duration::seconds(10));
        assert_eq!(cache.maybe_sweep(), 0);
    }

    #[test]
    fn hit_rate_is_rounded_to_two_decimals() {
        let (mut cache, _clock) = test_cache();
        cache.set(1, "a".to_string());
        cache.get(1);
        cache.get(1);
        cache.get(2);

        let stats = cache.stats();
        assert_eq!(stats.total_requests, 3);
        // 2/3 = 66.666... -> 66.67
        assert_eq!(stats.hit_rate, 66.67);
    }

    #[test]
    fn empty_cache_reports_zero_hit_rate() {
        let (cache, _clock) = test_cache();
        let stats = cache.stats();
        assert_eq!(stats.hit_rate, 0.0);
        assert_eq!(stats.total_requests, 0);
        assert!(stats.cached_session_ids.is_empty());
    }

    #[test]
    fn stats_snapshot_serializes() {
        let (mut cache, _clock) = test_cache();
        cache.set(1, "a".to_string());
        cache.get(1);

        let json = serde_json::to_value(cache.stats()).expect("serialize stats");
        assert_eq!(json["hits"], 1);
        assert_eq!(json["hit_rate"], 100.0);
        assert_eq!(json["cached_session_ids"][0], 1);
    }
}
