//! LRU Cache Usage Example
//!
//! Walks through insertion, promotion, eviction and removal on a small cache
//! and prints the metrics it collected.
//!
//! Run with: RUST_LOG=trace cargo run --example lru_usage

use lru_slab::config::LruCacheConfig;
use lru_slab::{CacheError, CacheMetrics, LruCache};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("LRU Cache Example");
    println!("=================\n");

    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CacheError> {
    let mut cache: LruCache<&str, u32> = LruCache::init(LruCacheConfig::new(3), None)?;
    println!("Created cache with capacity {}", cache.capacity());

    for (name, score) in [("alice", 90), ("bob", 75), ("carol", 82)] {
        cache.put(name, score);
    }
    print_order("After filling", &cache);

    // Reading promotes
    if let Some(score) = cache.get(&"alice") {
        println!("\nalice -> {score}");
    }
    print_order("After get(alice)", &cache);

    // A new key evicts the least recently used entry
    if let Some((key, value)) = cache.put("dave", 68) {
        println!("\nput(dave) evicted {key} -> {value}");
    }
    print_order("After put(dave)", &cache);

    // Updating an existing key never evicts
    let evicted = cache.put("carol", 88);
    println!("\nput(carol, 88) evicted {evicted:?}");
    print_order("After update", &cache);

    // Peeking leaves the order alone
    println!("\npeek(dave) -> {:?}", cache.peek(&"dave"));
    print_order("After peek(dave)", &cache);

    println!("\nremove(alice) -> {}", cache.remove(&"alice"));
    println!("remove(alice) -> {}", cache.remove(&"alice"));
    print_order("After remove", &cache);

    println!("\nget(zed) -> {:?}", cache.get(&"zed"));

    println!("\nMetrics ({})", cache.algorithm_name());
    for (name, value) in cache.metrics() {
        println!("  {name:<16} {value:>8.3}");
    }

    cache.clear();
    println!("\nAfter clear: len = {}", cache.len());

    // Zero capacity is a configuration error
    match LruCache::<&str, u32>::new(0) {
        Ok(_) => println!("\nunexpected: zero-capacity cache created"),
        Err(err) => println!("\nnew(0) -> {err}"),
    }

    Ok(())
}

fn print_order(label: &str, cache: &LruCache<&str, u32>) {
    let entries: Vec<String> = cache.iter().map(|(k, v)| format!("{k}={v}")).collect();
    println!("{label}: [{}] (MRU first)", entries.join(", "));
}
