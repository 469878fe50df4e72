//! Least Recently Used (LRU) Cache Implementation
//!
//! A fixed-capacity cache with O(1) `get`, `put` and `remove`. Entries are
//! kept in order of last use; inserting a new key into a full cache evicts
//! exactly one entry, the one used longest ago.
//!
//! # Structure
//!
//! ```text
//!   KeyIndex (HashTable<SlotId>)           List (arena of slots)
//!   ┌──────────┐                 ┌──────┬──────┬──────┬──────┬──────┐
//!   │ h(a) ────┼────────────────▶│ head │  a   │  c   │  b   │ tail │
//!   │ h(b) ────┼──────┐          │  ◀▶  │  ◀▶  │  ◀▶  │  ◀▶  │      │
//!   │ h(c) ────┼────┐ │          └──────┴──────┴──────┴──────┴──────┘
//!   └──────────┘    │ │            MRU ────────────────────▶ LRU
//!                   └─┴──────────▶ (slot indices, not pointers)
//! ```
//!
//! The index maps each key's hash to the arena slot holding its entry and
//! confirms a match against the key stored in that slot, so every key is
//! stored exactly once and only needs `Hash + Eq`. The arena links slots
//! into a list bounded by two sentinel slots. Both are owned by
//! the cache and only ever changed together, inside a single method call.
//!
//! # Performance Characteristics
//!
//! - **Time Complexity**:
//!   - Get: O(1)
//!   - Put: O(1) amortized
//!   - Remove: O(1)
//!   - Clear: O(n)
//!
//! - **Space Complexity**:
//!   - O(n) where n is the capacity of the cache
//!   - Freed slots are recycled, so a full cache under steady churn does not
//!     grow its arena.
//!
//! # Thread Safety
//!
//! `LruCache` is not synchronized. Even `get` reorders entries, so shared
//! use needs exclusive locking; enable the `concurrent` feature for
//! [`ConcurrentLruCache`](crate::ConcurrentLruCache) or wrap the cache in a
//! `Mutex` yourself.

extern crate alloc;

use crate::config::LruCacheConfig;
use crate::entry::Entry;
use crate::error::CacheError;
use crate::index::KeyIndex;
use crate::list::{self, List};
use crate::metrics::{CacheMetrics, LruCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use core::iter::FusedIterator;
use core::num::NonZeroUsize;

#[cfg(feature = "default-hasher")]
use hashbrown::DefaultHashBuilder;

#[cfg(not(feature = "default-hasher"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;

/// Upper bound on the number of slots reserved up front. Larger caches grow
/// their arena and index on demand.
const PREALLOC_LIMIT: usize = 1 << 16;

/// An implementation of a Least Recently Used (LRU) cache.
///
/// The cache has a fixed capacity and supports O(1) operations for
/// inserting, retrieving, and updating entries. When a new key is inserted
/// into a full cache, the least recently used entry is evicted.
///
/// # Examples
///
/// ```
/// use lru_slab::LruCache;
///
/// let mut cache = LruCache::new(2).unwrap();
///
/// cache.put("apple", 1);
/// cache.put("banana", 2);
///
/// // Accessing items updates their recency
/// assert_eq!(cache.get(&"apple"), Some(&1));
///
/// // Adding beyond capacity evicts the least recently used item
/// assert_eq!(cache.put("cherry", 3), Some(("banana", 2)));
/// assert_eq!(cache.get(&"banana"), None);
/// assert_eq!(cache.get(&"apple"), Some(&1));
/// assert_eq!(cache.get(&"cherry"), Some(&3));
/// ```
pub struct LruCache<K, V, S = DefaultHashBuilder> {
    capacity: NonZeroUsize,
    list: List<Entry<K, V>>,
    index: KeyIndex<S>,
    metrics: LruCacheMetrics,
}

impl<K: Hash + Eq, V> LruCache<K, V> {
    /// Creates an LRU cache holding at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidConfiguration`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<LruCache<K, V, DefaultHashBuilder>, CacheError> {
        LruCache::init(LruCacheConfig::new(capacity), None)
    }

    /// Creates an LRU cache from a configuration with an optional hasher.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidConfiguration`] if the configured
    /// capacity is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use lru_slab::config::LruCacheConfig;
    /// use lru_slab::LruCache;
    ///
    /// let cache: LruCache<u64, String> =
    ///     LruCache::init(LruCacheConfig { capacity: 128 }, None).unwrap();
    /// assert!(cache.is_empty());
    /// ```
    pub fn init(
        config: LruCacheConfig,
        hasher: Option<DefaultHashBuilder>,
    ) -> Result<LruCache<K, V, DefaultHashBuilder>, CacheError> {
        LruCache::init_with_hasher(config, hasher.unwrap_or_default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LruCache<K, V, S> {
    /// Creates an LRU cache with the given capacity and hash builder.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidConfiguration`] if `capacity` is zero.
    pub fn with_hasher(capacity: usize, hash_builder: S) -> Result<Self, CacheError> {
        Self::init_with_hasher(LruCacheConfig::new(capacity), hash_builder)
    }

    /// Creates an LRU cache from a configuration and a hash builder.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidConfiguration`] if the configured
    /// capacity is zero.
    pub fn init_with_hasher(config: LruCacheConfig, hash_builder: S) -> Result<Self, CacheError> {
        let capacity = config.validate().map_err(|err| {
            tracing::warn!(capacity = config.capacity, "rejecting LRU cache configuration");
            err
        })?;

        // One extra slot: a put on a new key links its entry before the
        // over-capacity entry is evicted.
        let reserve = capacity.get().saturating_add(1).min(PREALLOC_LIMIT);
        tracing::debug!(capacity = capacity.get(), reserve, "creating LRU cache");

        Ok(LruCache {
            capacity,
            list: List::with_capacity(reserve),
            index: KeyIndex::with_capacity_and_hasher(reserve, hash_builder),
            metrics: LruCacheMetrics::new(capacity.get() as u64),
        })
    }

    /// Returns the maximum number of entries the cache can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Returns the number of entries currently in the cache.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the value for `key` and marks it most recently used.
    ///
    /// A miss returns `None` and leaves the cache untouched apart from the
    /// miss counter.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.index.lookup(&self.list, key) {
            Some(id) => {
                self.list.move_to_front(id);
                self.metrics.core.record_hit();
                Some(&self.list.get(id).value)
            }
            None => {
                self.metrics.core.record_miss();
                None
            }
        }
    }

    /// Mutable counterpart of [`get`](Self::get).
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.index.lookup(&self.list, key) {
            Some(id) => {
                self.list.move_to_front(id);
                self.metrics.core.record_hit();
                Some(&mut self.list.get_mut(id).value)
            }
            None => {
                self.metrics.core.record_miss();
                None
            }
        }
    }

    /// Inserts or updates `key`, making it the most recently used entry.
    ///
    /// If `key` is already present its value is overwritten in place; the
    /// cache does not grow and nothing is evicted. Otherwise a new entry is
    /// created, and if that takes the cache over capacity the least recently
    /// used entry is evicted and returned.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(id) = self.index.lookup(&self.list, &key) {
            self.list.get_mut(id).value = value;
            self.list.move_to_front(id);
            self.metrics.core.record_update();
            return None;
        }

        let id = self.list.push_front(Entry::new(key, value));
        self.index.insert(&self.list, id);
        self.metrics.core.record_insertion();

        let evicted = if self.list.len() > self.capacity.get() {
            self.take_lru().map(|entry| {
                self.metrics.core.record_eviction();
                tracing::trace!(capacity = self.capacity.get(), "evicted LRU entry");
                entry.into_pair()
            })
        } else {
            None
        };

        self.check_invariants();
        evicted
    }

    /// Returns the value for `key` without changing its recency.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let id = self.index.lookup(&self.list, key)?;
        Some(&self.list.get(id).value)
    }

    /// Returns `true` if `key` is present. Does not change recency.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.index.lookup(&self.list, key).is_some()
    }

    /// Returns the entry that the next eviction would drop, without
    /// changing its recency.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.list.back().map(Entry::as_pair)
    }

    /// Removes `key` if present. Returns whether an entry was removed.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.pop(key).is_some()
    }

    /// Removes `key` if present and returns its value.
    pub fn pop<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let id = self.index.delete(&self.list, key)?;
        let entry = self.list.remove(id);
        self.metrics.core.record_removal();
        tracing::trace!(len = self.list.len(), "removed entry");
        self.check_invariants();
        Some(entry.value)
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        let entry = self.take_lru()?;
        self.metrics.core.record_removal();
        tracing::trace!(len = self.list.len(), "removed LRU entry");
        self.check_invariants();
        Some(entry.into_pair())
    }

    /// Removes every entry. The capacity is unchanged.
    pub fn clear(&mut self) {
        tracing::debug!(dropped = self.list.len(), "clearing LRU cache");
        self.index.clear();
        self.list.clear();
    }

    /// Iterates over the entries from most to least recently used.
    ///
    /// Iteration does not change recency.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.list.iter(),
        }
    }

    /// Unlinks the LRU entry and drops its key from the index.
    fn take_lru(&mut self) -> Option<Entry<K, V>> {
        let id = self.list.back_id()?;
        let removed = self.index.delete_slot(&self.list, id);
        debug_assert!(removed, "LRU entry missing from the index");
        Some(self.list.remove(id))
    }

    #[inline]
    fn check_invariants(&self) {
        debug_assert_eq!(
            self.index.len(),
            self.list.len(),
            "index and recency list disagree"
        );
        debug_assert!(self.list.len() <= self.capacity.get());
    }
}

impl<K, V, S> CacheMetrics for LruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}

impl<K, V, S> core::fmt::Debug for LruCache<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.capacity)
            .field("len", &self.list.len())
            .finish()
    }
}

impl<'a, K: Hash + Eq, V, S: BuildHasher> IntoIterator for &'a LruCache<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

/// Iterator over the entries of an [`LruCache`], most recently used first.
///
/// Created by [`LruCache::iter`]. Reverse it to walk from the least recently
/// used entry.
pub struct Iter<'a, K, V> {
    inner: list::Iter<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        self.inner.next().map(Entry::as_pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a V)> {
        self.inner.next_back().map(Entry::as_pair)
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> core::fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.inner.len())
            .finish()
    }
}
