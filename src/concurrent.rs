//! Concurrent LRU Cache
//!
//! A thread-safe wrapper around [`LruCache`](crate::LruCache).
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │          ConcurrentLruCache          │
//! │  ┌────────────────────────────────┐  │
//! │  │     parking_lot::Mutex         │  │
//! │  │  ┌──────────────────────────┐  │  │
//! │  │  │ LruCache                 │  │  │
//! │  │  │   KeyIndex + List        │  │  │
//! │  │  └──────────────────────────┘  │  │
//! │  └────────────────────────────────┘  │
//! └──────────────────────────────────────┘
//! ```
//!
//! One lock guards the whole cache for the duration of each call.
//!
//! ## Locking
//!
//! Every `get` relinks the entry it finds, so lookups take the same
//! exclusive lock as writes. The key space is not sharded: there is one
//! recency order and the entry evicted is always the global LRU entry.
//!
//! # Example
//!
//! ```rust
//! use lru_slab::ConcurrentLruCache;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let cache = Arc::new(ConcurrentLruCache::new(1000).unwrap());
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|t| {
//!         let cache = Arc::clone(&cache);
//!         thread::spawn(move || {
//!             for i in 0..100 {
//!                 let key = format!("key_{}_{}", t, i);
//!                 cache.put(key.clone(), i);
//!                 assert_eq!(cache.get(&key), Some(i));
//!             }
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(cache.len(), 400);
//! ```

extern crate alloc;

use crate::config::LruCacheConfig;
use crate::error::CacheError;
use crate::lru::LruCache;
use crate::metrics::CacheMetrics;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use parking_lot::Mutex;

#[cfg(feature = "default-hasher")]
use hashbrown::DefaultHashBuilder;

#[cfg(not(feature = "default-hasher"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;

/// A thread-safe LRU cache.
///
/// All methods take `&self`; share the cache between threads with `Arc`.
/// Values are handed out by clone ([`get`](Self::get)) or through a closure
/// run while the lock is held ([`get_with`](Self::get_with)), so no
/// reference into the cache outlives a call.
pub struct ConcurrentLruCache<K, V, S = DefaultHashBuilder> {
    inner: Mutex<LruCache<K, V, S>>,
}

impl<K: Hash + Eq, V> ConcurrentLruCache<K, V> {
    /// Creates a concurrent LRU cache holding at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidConfiguration`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<ConcurrentLruCache<K, V, DefaultHashBuilder>, CacheError> {
        ConcurrentLruCache::init(LruCacheConfig::new(capacity), None)
    }

    /// Creates a concurrent LRU cache from a configuration with an optional hasher.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidConfiguration`] if the configured
    /// capacity is zero.
    pub fn init(
        config: LruCacheConfig,
        hasher: Option<DefaultHashBuilder>,
    ) -> Result<ConcurrentLruCache<K, V, DefaultHashBuilder>, CacheError> {
        Ok(ConcurrentLruCache {
            inner: Mutex::new(LruCache::init(config, hasher)?),
        })
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> ConcurrentLruCache<K, V, S> {
    /// Creates a concurrent LRU cache with a custom hash builder.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidConfiguration`] if the configured
    /// capacity is zero.
    pub fn init_with_hasher(config: LruCacheConfig, hash_builder: S) -> Result<Self, CacheError> {
        Ok(ConcurrentLruCache {
            inner: Mutex::new(LruCache::init_with_hasher(config, hash_builder)?),
        })
    }

    /// Wraps an existing cache.
    pub fn from_cache(cache: LruCache<K, V, S>) -> Self {
        ConcurrentLruCache {
            inner: Mutex::new(cache),
        }
    }

    /// Unwraps the inner cache.
    pub fn into_inner(self) -> LruCache<K, V, S> {
        self.inner.into_inner()
    }

    /// Returns the maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Returns a clone of the value for `key` and marks it most recently used.
    ///
    /// For values that are expensive to clone, use [`get_with`](Self::get_with).
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    /// Applies `f` to the value for `key` while holding the lock.
    ///
    /// Counts as a use of `key`. The lock is released after `f` returns.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lru_slab::ConcurrentLruCache;
    ///
    /// let cache = ConcurrentLruCache::new(4).unwrap();
    /// cache.put("key", String::from("hello world"));
    /// assert_eq!(cache.get_with(&"key", |v| v.len()), Some(11));
    /// ```
    pub fn get_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&V) -> R,
    {
        self.inner.lock().get(key).map(f)
    }

    /// Applies `f` to a mutable reference to the value for `key`.
    ///
    /// Counts as a use of `key`.
    pub fn get_mut_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&mut V) -> R,
    {
        self.inner.lock().get_mut(key).map(f)
    }

    /// Returns a clone of the value for `key` without changing its recency.
    pub fn peek<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
    {
        self.inner.lock().peek(key).cloned()
    }

    /// Returns `true` if `key` is present. Does not change recency.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().contains(key)
    }

    /// Removes `key` if present. Returns whether an entry was removed.
    pub fn remove<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().remove(key)
    }

    /// Removes `key` if present and returns its value.
    pub fn pop<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().pop(key)
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&self) -> Option<(K, V)> {
        self.inner.lock().pop_lru()
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Copies out the keys from most to least recently used.
    ///
    /// The snapshot is taken under a single lock acquisition.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.inner.lock().iter().map(|(k, _)| k.clone()).collect()
    }

    /// Inserts or updates `key`, making it the most recently used entry.
    ///
    /// Returns the evicted entry if the insertion pushed the cache over
    /// capacity.
    pub fn put(&self, key: K, value: V) -> Option<(K, V)> {
        self.inner.lock().put(key, value)
    }
}

impl<K, V, S> CacheMetrics for ConcurrentLruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.inner.lock().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        "ConcurrentLRU"
    }
}

impl<K, V, S> core::fmt::Debug for ConcurrentLruCache<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.inner.try_lock() {
            Some(cache) => f
                .debug_struct("ConcurrentLruCache")
                .field("inner", &*cache)
                .finish(),
            None => f
                .debug_struct("ConcurrentLruCache")
                .field("inner", &"<locked>")
                .finish(),
        }
    }
}
