#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │ LruCache<K, V, S>            get / put / remove / clear     │
//! │                                                             │
//! │   ┌──────────────────────┐      ┌────────────────────────┐  │
//! │   │ KeyIndex             │      │ List<Entry<K, V>>      │  │
//! │   │ HashTable<SlotId>    │─────▶│ slot arena, sentinels  │  │
//! │   └──────────────────────┘      │ MRU ◀──────────▶ LRU   │  │
//! │                                 └────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Performance Characteristics
//!
//! | Operation | Time | Notes |
//! |-----------|------|-------|
//! | `get`     | O(1) | promotes the entry to MRU |
//! | `put`     | O(1) amortized | evicts at most one entry |
//! | `remove`  | O(1) | |
//! | `peek`    | O(1) | no promotion |
//! | `clear`   | O(n) | keeps the allocation |
//!
//! ## Failure Semantics
//!
//! Constructing a cache with capacity 0 fails with
//! [`CacheError::InvalidConfiguration`]. Everything else is total: misses
//! come back as `None` or `false`.
//!
//! ```rust
//! use lru_slab::{CacheError, LruCache};
//!
//! let err = LruCache::<u32, u32>::new(0).unwrap_err();
//! assert_eq!(err, CacheError::InvalidConfiguration { capacity: 0 });
//! ```
//!
//! ## Concurrent Cache
//!
//! Enable the `concurrent` feature for [`ConcurrentLruCache`], a thread-safe
//! version guarded by a single lock. See the [`concurrent`] module for an
//! example.
//!
//! ```toml
//! [dependencies]
//! lru-slab = { version = "0.1", features = ["concurrent"] }
//! ```
//!
//! ## Modules
//!
//! - [`lru`]: the LRU cache
//! - [`config`]: configuration structure
//! - [`error`]: construction errors
//! - [`metrics`]: counters for cache activity
//! - [`concurrent`]: thread-safe wrapper (requires `concurrent` feature)

#![no_std]

extern crate alloc;

#[cfg(not(feature = "default-hasher"))]
extern crate std;

/// Cache entry type.
///
/// One key/value association; recency links live in the arena slot that
/// owns it.
pub(crate) mod entry;

/// Slot-arena doubly linked list that keeps entries in recency order.
///
/// **Note**: This module is internal infrastructure. Its slot handles must
/// never escape the cache API.
pub(crate) mod list;

/// Key to slot-handle index.
pub(crate) mod index;

/// Cache configuration.
pub mod config;

/// Error type returned by cache constructors.
pub mod error;

/// Least Recently Used (LRU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least recently used item when
/// a new key is inserted at capacity.
pub mod lru;

/// Cache metrics system.
///
/// Counters for hits, misses, insertions, updates, evictions and removals,
/// reported in a deterministic order.
pub mod metrics;

/// Concurrent cache implementation.
///
/// A single-lock, thread-safe wrapper around [`LruCache`].
///
/// Available when the `concurrent` feature is enabled.
#[cfg(feature = "concurrent")]
pub mod concurrent;

pub use config::LruCacheConfig;
pub use error::CacheError;
pub use lru::LruCache;
pub use metrics::{CacheMetrics, LruCacheMetrics};

#[cfg(feature = "concurrent")]
pub use concurrent::ConcurrentLruCache;
