#![no_std]
extern crate alloc;
extern crate lru_slab;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use lru_slab::config::LruCacheConfig;
use lru_slab::{CacheError, LruCache};

// Helper to create caches with the init pattern
fn make_lru<K: core::hash::Hash + Eq + Clone, V>(cap: usize) -> LruCache<K, V> {
    LruCache::init(LruCacheConfig::new(cap), None).unwrap()
}

#[test]
fn test_lru_in_no_std() {
    let mut cache = make_lru(2);
    cache.put("apple", 1);
    cache.put("banana", 2);
    assert_eq!(cache.get(&"apple"), Some(&1));
    assert_eq!(cache.get(&"banana"), Some(&2));

    // Evicts "apple", which was touched first
    assert_eq!(cache.put("cherry", 3), Some(("apple", 1)));
    assert_eq!(cache.get(&"apple"), None);
    assert_eq!(cache.get(&"cherry"), Some(&3));
}

#[test]
fn test_lru_with_alloc_types() {
    let mut cache: LruCache<String, Vec<u8>> = make_lru(3);

    for i in 0..5u8 {
        cache.put(format!("key{i}"), alloc::vec![i; i as usize]);
    }

    assert_eq!(cache.len(), 3);
    assert!(!cache.contains("key0"));
    assert!(!cache.contains("key1"));
    assert_eq!(cache.get("key4").map(Vec::len), Some(4));

    if let Some(bytes) = cache.get_mut("key2") {
        bytes.push(0xff);
    }
    assert_eq!(cache.peek("key2"), Some(&alloc::vec![2, 2, 0xff]));
}

#[test]
fn test_capacity_zero_in_no_std() {
    let result = LruCache::<u32, u32>::init(LruCacheConfig::new(0), None);
    assert!(matches!(
        result,
        Err(CacheError::InvalidConfiguration { capacity: 0 })
    ));
}

#[test]
fn test_iteration_in_no_std() {
    let mut cache = make_lru(4);
    for i in 0..4u32 {
        cache.put(i, i * i);
    }
    cache.get(&0);

    let keys: Vec<u32> = cache.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, alloc::vec![0, 3, 2, 1]);

    let lru: Vec<u32> = cache.iter().rev().map(|(k, _)| *k).collect();
    assert_eq!(lru, alloc::vec![1, 2, 3, 0]);
}
