//! LRU Cache Metrics
//!
//! Metrics reported by [`LruCache`](crate::LruCache).

extern crate alloc;

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// LRU metrics: the core counters plus the configured capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LruCacheMetrics {
    /// Core metrics common to all cache flavours
    pub core: CoreCacheMetrics,
    /// Entry capacity of the cache these metrics belong to
    pub capacity: u64,
}

impl LruCacheMetrics {
    /// Creates zeroed metrics for a cache of the given capacity.
    pub fn new(capacity: u64) -> Self {
        Self {
            core: CoreCacheMetrics::new(),
            capacity,
        }
    }

    /// Converts LRU metrics to a BTreeMap for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();
        metrics.insert("capacity".to_string(), self.capacity as f64);
        metrics
    }
}

impl CacheMetrics for LruCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lru_metrics_include_capacity() {
        let metrics = LruCacheMetrics::new(16);
        let map = metrics.metrics();
        assert_eq!(map.get("capacity"), Some(&16.0));
        assert_eq!(map.get("requests"), Some(&0.0));
        assert_eq!(metrics.algorithm_name(), "LRU");
    }
}
