use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lru_arena::config::LruCacheConfig;
use lru_arena::LruCache;
use std::num::NonZeroUsize;

fn make_lru<K: std::hash::Hash + Eq + Clone, V>(cap: usize) -> LruCache<K, V> {
    let config = LruCacheConfig {
        capacity: NonZeroUsize::new(cap).unwrap(),
    };
    LruCache::init(config, None)
}

fn filled(cap: usize) -> LruCache<usize, usize> {
    let mut cache = make_lru(cap);
    for i in 0..cap {
        cache.set(i, i);
    }
    cache
}

pub fn criterion_benchmark(c: &mut Criterion) {
    const CACHE_SIZE: usize = 1000;
    let mut group = c.benchmark_group("LRU Operations");

    {
        let mut cache = filled(CACHE_SIZE);

        group.bench_function("get hit", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.get(&(i % CACHE_SIZE)));
                }
            });
        });

        group.bench_function("get miss", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.get(&(i + CACHE_SIZE)));
                }
            });
        });

        group.bench_function("peek", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.peek(&(i % CACHE_SIZE)));
                }
            });
        });

        group.bench_function("set existing", |b| {
            b.iter(|| {
                for i in 0..100 {
                    cache.set(black_box(i % CACHE_SIZE), i);
                }
            });
        });
    }

    {
        let mut cache = filled(CACHE_SIZE);
        let mut next = CACHE_SIZE;

        // Every insert is a new key, so every insert evicts
        group.bench_function("set with eviction", |b| {
            b.iter(|| {
                for _ in 0..100 {
                    black_box(cache.put(next, next));
                    next += 1;
                }
            });
        });
    }

    group.finish();

    let mut scaling = c.benchmark_group("LRU Mixed Workload");
    for cap in [64usize, 1024, 16384] {
        scaling.bench_with_input(BenchmarkId::from_parameter(cap), &cap, |b, &cap| {
            let mut cache = filled(cap);
            let mut seed = 0x9e37_79b9_u64;
            b.iter(|| {
                for _ in 0..100 {
                    seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
                    let key = (seed >> 33) as usize % (cap * 2);
                    if seed & 1 == 0 {
                        black_box(cache.get(&key));
                    } else {
                        cache.set(key, key);
                    }
                }
            });
        });
    }
    scaling.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
