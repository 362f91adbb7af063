//! Transposition cache for the negamax search
//!
//! Maps a Zobrist key to the `(score, move)` pair the search settled on for
//! that position. The cache is a pure memoization layer: a hit is returned
//! as-is, so it must be cleared whenever the search depth changes.
//!
//! # Example
//!
//! ```
//! use xo::search::TranspositionCache;
//!
//! let mut cache = TranspositionCache::new(1024);
//!
//! let key = 0x1234_5678_9ABC_DEF0;
//! cache.store(key, 42, Some(5));
//!
//! let entry = cache.get(key).unwrap();
//! assert_eq!(entry.score, 42);
//! assert_eq!(entry.best_move, Some(5));
//! ```

use std::collections::HashMap;

/// Cached search result for one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheEntry {
    /// Score from the perspective of the side to move
    pub score: i32,
    /// Best move found, `None` when the position had no move to play
    pub best_move: Option<usize>,
}

/// Position cache keyed by the full 64-bit hash.
///
/// A key match is taken as identity; two positions sharing a key would
/// share an entry. Entries are only ever removed in bulk by [`clear`].
///
/// Growth is bounded by `capacity`. Once full, or when the allocator
/// refuses to grow the map, new entries are dropped and the search simply
/// sees more misses. Callers store exact scores only, so a miss costs time
/// and never changes a result.
///
/// [`clear`]: TranspositionCache::clear
#[derive(Debug)]
pub struct TranspositionCache {
    entries: HashMap<u64, CacheEntry>,
    capacity: usize,
    stats: CacheStats,
}

impl TranspositionCache {
    /// Create an empty cache holding at most `capacity` entries.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity: capacity.max(1),
            stats: CacheStats::default(),
        }
    }

    /// Look up a position. Counts as a hit or a miss.
    pub fn get(&mut self, key: u64) -> Option<CacheEntry> {
        let entry = self.entries.get(&key).copied();
        if entry.is_some() {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
        }
        entry
    }

    /// Record the result for a position, replacing any previous entry.
    ///
    /// Returns `false` when the entry was skipped.
    pub fn store(&mut self, key: u64, score: i32, best_move: Option<usize>) -> bool {
        let entry = CacheEntry { score, best_move };

        if let Some(slot) = self.entries.get_mut(&key) {
            *slot = entry;
            self.stats.stores += 1;
            return true;
        }

        if self.entries.len() >= self.capacity {
            self.stats.skipped += 1;
            log::trace!("cache full at {} entries, skipping {key:#018x}", self.capacity);
            return false;
        }

        if let Err(err) = self.entries.try_reserve(1) {
            self.stats.skipped += 1;
            log::warn!("cache allocation failed, skipping entry: {err}");
            return false;
        }

        self.entries.insert(key, entry);
        self.stats.stores += 1;
        true
    }

    /// Drop every entry. Counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Drop every entry and reset the counters.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.stats = CacheStats::default();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Counters accumulated since creation or the last [`reset`].
    ///
    /// [`reset`]: TranspositionCache::reset
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

/// Counters describing cache traffic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups that found an entry
    pub hits: u64,
    /// Lookups that found nothing
    pub misses: u64,
    /// Entries written or overwritten
    pub stores: u64,
    /// Entries dropped because the cache was full or could not grow
    pub skipped: u64,
}

impl CacheStats {
    /// Hit rate in percent (0-100), 0 when nothing was looked up.
    #[must_use]
    pub fn hit_percent(&self) -> u8 {
        let lookups = self.hits + self.misses;
        if lookups == 0 {
            return 0;
        }
        (self.hits * 100 / lookups) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_store_get() {
        let mut cache = TranspositionCache::new(16);
        let key = 0x1234_5678_9ABC_DEF0;

        assert!(cache.store(key, 100, Some(9)));

        let entry = cache.get(key).unwrap();
        assert_eq!(entry.score, 100);
        assert_eq!(entry.best_move, Some(9));
    }

    #[test]
    fn test_cache_miss() {
        let mut cache = TranspositionCache::new(16);
        cache.store(1, 5, Some(0));
        assert!(cache.get(2).is_none());

        let stats = cache.stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 0);
    }

    #[test]
    fn test_cache_overwrite() {
        let mut cache = TranspositionCache::new(16);
        cache.store(7, 1, Some(1));
        cache.store(7, -3, None);

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(7), Some(CacheEntry { score: -3, best_move: None }));
    }

    #[test]
    fn test_cache_capacity_skips() {
        let mut cache = TranspositionCache::new(2);
        assert_eq!(cache.capacity(), 2);
        assert!(cache.store(1, 0, None));
        assert!(cache.store(2, 0, None));
        assert!(!cache.store(3, 0, None));

        assert_eq!(cache.len(), 2);
        assert!(cache.get(3).is_none());
        assert_eq!(cache.stats().skipped, 1);

        // Existing keys can still be updated when full
        assert!(cache.store(1, 8, Some(4)));
        assert_eq!(cache.get(1).map(|e| e.score), Some(8));
    }

    #[test]
    fn test_cache_clear() {
        let mut cache = TranspositionCache::new(16);
        cache.store(1, 10, Some(2));
        cache.get(1);
        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(cache.stats().hits, 1);

        cache.reset();
        assert_eq!(cache.stats(), CacheStats::default());
    }

    #[test]
    fn test_cache_hit_percent() {
        let mut cache = TranspositionCache::new(16);
        assert_eq!(cache.stats().hit_percent(), 0);

        cache.store(1, 0, None);
        cache.get(1);
        cache.get(1);
        cache.get(1);
        cache.get(2);
        assert_eq!(cache.stats().hit_percent(), 75);
    }
}
