use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lru_slab::config::LruCacheConfig;
use lru_slab::LruCache;

// Helper to create an LruCache with the init pattern
fn make_lru<K: std::hash::Hash + Eq + Clone, V>(cap: usize) -> LruCache<K, V> {
    LruCache::init(LruCacheConfig { capacity: cap }, None).unwrap()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    const CACHE_SIZE: usize = 1000;
    let mut group = c.benchmark_group("Cache Operations");

    {
        let mut cache = make_lru(CACHE_SIZE);
        for i in 0..CACHE_SIZE {
            cache.put(i, i);
        }

        group.bench_function("LRU get hit", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.get(&(i % CACHE_SIZE)));
                }
            });
        });

        group.bench_function("LRU get miss", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.get(&(i + CACHE_SIZE)));
                }
            });
        });

        group.bench_function("LRU peek", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.peek(&(i % CACHE_SIZE)));
                }
            });
        });

        group.bench_function("LRU put existing", |b| {
            let mut counter = 0;
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.put(i % CACHE_SIZE, counter));
                    counter += 1;
                }
            });
        });
    }

    {
        let mut cache = make_lru(CACHE_SIZE);
        for i in 0..CACHE_SIZE {
            cache.put(i, i);
        }

        // Every put is a new key, so every put evicts
        group.bench_function("LRU put evicting", |b| {
            let mut next = CACHE_SIZE;
            b.iter(|| {
                for _ in 0..100 {
                    black_box(cache.put(next, next));
                    next += 1;
                }
            });
        });
    }

    {
        let mut cache = make_lru(CACHE_SIZE);

        group.bench_function("LRU put/remove", |b| {
            b.iter(|| {
                for i in 0..100 {
                    cache.put(i, i);
                }
                for i in 0..100 {
                    black_box(cache.remove(&i));
                }
            });
        });
    }

    group.finish();
}

/// Mixed workload at several capacities, 80% reads over a key space twice
/// the capacity.
pub fn capacity_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("LRU Mixed Workload");

    for &capacity in &[64usize, 1_024, 16_384] {
        let mut cache = make_lru(capacity);
        for i in 0..capacity {
            cache.put(i, i);
        }
        let key_space = capacity * 2;

        group.bench_with_input(BenchmarkId::from_parameter(capacity), &capacity, |b, _| {
            let mut i = 0usize;
            b.iter(|| {
                for _ in 0..100 {
                    let key = i.wrapping_mul(2_654_435_761) % key_space;
                    if i % 5 == 0 {
                        black_box(cache.put(key, i));
                    } else {
                        black_box(cache.get(&key));
                    }
                    i += 1;
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark, capacity_scaling);
criterion_main!(benches);
