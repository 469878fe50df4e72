//! Concurrent Cache Usage Examples
//!
//! Demonstrates multi-threaded usage patterns for the concurrent LRU cache.
//!
//! Run with: cargo run --example concurrent_usage --features concurrent

use lru_slab::config::LruCacheConfig;
use lru_slab::{CacheError, CacheMetrics, ConcurrentLruCache};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

const NUM_THREADS: usize = 8;
const OPS_PER_THREAD: usize = 10_000;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("Concurrent LRU Cache Examples");
    println!("=============================\n");

    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CacheError> {
    shared_reads_and_writes()?;
    closure_access()?;
    throughput()?;
    Ok(())
}

/// Several threads populate and read one shared cache.
fn shared_reads_and_writes() -> Result<(), CacheError> {
    println!("1. Shared reads and writes");

    let cache: Arc<ConcurrentLruCache<String, usize>> =
        Arc::new(ConcurrentLruCache::init(LruCacheConfig::new(100), None)?);

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..50 {
                    let key = format!("thread{t}_key{i}");
                    cache.put(key.clone(), i);
                    assert_eq!(cache.get(&key), Some(i));
                }
            })
        })
        .collect();
    for handle in handles {
        let _ = handle.join();
    }

    println!("   len = {}, capacity = {}", cache.len(), cache.capacity());
    println!("   most recent keys: {:?}\n", &cache.keys()[..3]);
    Ok(())
}

/// `get_with` and `get_mut_with` run a closure under the lock instead of
/// cloning the value out.
fn closure_access() -> Result<(), CacheError> {
    println!("2. Closure access");

    let cache: Arc<ConcurrentLruCache<&str, Vec<u64>>> =
        Arc::new(ConcurrentLruCache::new(16)?);
    cache.put("samples", Vec::new());

    let handles: Vec<_> = (0..4u64)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..25 {
                    cache.get_mut_with(&"samples", |v| v.push(t * 100 + i));
                }
            })
        })
        .collect();
    for handle in handles {
        let _ = handle.join();
    }

    let count = cache.get_with(&"samples", Vec::len).unwrap_or(0);
    println!("   collected {count} samples without cloning the vector\n");
    Ok(())
}

/// Mixed workload throughput with every thread contending on one lock.
fn throughput() -> Result<(), CacheError> {
    println!("3. Mixed workload throughput");

    let cache: Arc<ConcurrentLruCache<usize, usize>> =
        Arc::new(ConcurrentLruCache::new(1_000)?);

    let start = Instant::now();
    let handles: Vec<_> = (0..NUM_THREADS)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..OPS_PER_THREAD {
                    let key = (t * 31 + i * 7) % 2_000;
                    if i % 4 == 0 {
                        cache.put(key, i);
                    } else {
                        cache.get(&key);
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        let _ = handle.join();
    }
    let elapsed = start.elapsed();

    let total = NUM_THREADS * OPS_PER_THREAD;
    println!("   {total} ops in {elapsed:?}");
    println!(
        "   {:.0} ops/sec",
        total as f64 / elapsed.as_secs_f64().max(f64::EPSILON)
    );

    let metrics = cache.metrics();
    println!(
        "   hit rate {:.1}%, evictions {}",
        metrics.get("hit_rate").copied().unwrap_or(0.0) * 100.0,
        metrics.get("evictions").copied().unwrap_or(0.0)
    );
    Ok(())
}
