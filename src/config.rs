//! Cache Configuration
//!
//! Configuration for [`LruCache`](crate::LruCache) and, with the `concurrent`
//! feature, [`ConcurrentLruCache`](crate::ConcurrentLruCache).
//!
//! The struct has public fields for simple instantiation. Nothing is checked
//! until the config is handed to a constructor, which calls
//! [`LruCacheConfig::validate`] and fails with
//! [`CacheError::InvalidConfiguration`] rather than clamping.
//!
//! # Sizing
//!
//! `capacity` is a count of entries, not bytes. Each entry costs the size of
//! the key and the value, plus roughly 24 bytes of links and index
//! bookkeeping. The index holds slot handles only, never a copy of the key.
//!
//! # Examples
//!
//! ```
//! use lru_slab::config::LruCacheConfig;
//! use lru_slab::LruCache;
//!
//! let config = LruCacheConfig { capacity: 10_000 };
//! let cache: LruCache<String, Vec<u8>> = LruCache::init(config, None).unwrap();
//! assert_eq!(cache.capacity(), 10_000);
//! ```

use crate::error::CacheError;
use core::fmt;
use core::num::NonZeroUsize;

/// Configuration for an LRU (Least Recently Used) cache.
///
/// # Fields
///
/// - `capacity`: Maximum number of entries the cache can hold. Must be at
///   least 1.
///
/// # Examples
///
/// ```
/// use lru_slab::config::LruCacheConfig;
/// use lru_slab::CacheError;
///
/// assert!(LruCacheConfig::new(8).validate().is_ok());
/// assert_eq!(
///     LruCacheConfig::new(0).validate(),
///     Err(CacheError::InvalidConfiguration { capacity: 0 }),
/// );
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LruCacheConfig {
    /// Maximum number of key-value pairs the cache can hold.
    pub capacity: usize,
}

impl LruCacheConfig {
    /// Creates a configuration for a cache holding at most `capacity` entries.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        LruCacheConfig { capacity }
    }

    /// Checks the configuration and returns the capacity as a `NonZeroUsize`.
    pub fn validate(&self) -> Result<NonZeroUsize, CacheError> {
        NonZeroUsize::new(self.capacity).ok_or(CacheError::InvalidConfiguration {
            capacity: self.capacity,
        })
    }
}

impl fmt::Debug for LruCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lru_config_creation() {
        let config = LruCacheConfig { capacity: 1000 };
        assert_eq!(config.capacity, 1000);
        assert_eq!(config, LruCacheConfig::new(1000));
    }

    #[test]
    fn test_lru_config_validate() {
        assert_eq!(LruCacheConfig::new(1).validate().map(NonZeroUsize::get), Ok(1));
        assert_eq!(
            LruCacheConfig::new(0).validate(),
            Err(CacheError::InvalidConfiguration { capacity: 0 })
        );
    }
}
