use std::hint::black_box;

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
type RandomState = hashbrown::DefaultHashBuilder;
type BidiMap<K, V> = tether_bimap::bidi_hash_map::BidiHashMap<K, V, RandomState>;

type HashMap<K, V> = hashbrown::HashMap<K, V, RandomState>;
type HashLinkedMap<K, V> = hashlink::LinkedHashMap<K, V, RandomState>;
type IndexMap<K, V> = indexmap::IndexMap<K, V, RandomState>;

const SIZES: &[usize] = &[10000];

/// Two plain maps kept in sync by hand, the usual ad-hoc bimap.
#[derive(Default)]
struct MapPair {
    forward: HashMap<usize, usize>,
    backward: HashMap<usize, usize>,
}

impl MapPair {
    fn insert(&mut self, key: usize, value: usize) {
        if let Some(old) = self.forward.insert(key, value) {
            self.backward.remove(&old);
        }
        if let Some(old_key) = self.backward.insert(value, key) {
            if old_key != key {
                self.forward.remove(&old_key);
            }
        }
    }

    fn remove(&mut self, key: &usize) -> Option<usize> {
        let value = self.forward.remove(key)?;
        self.backward.remove(&value);
        Some(value)
    }
}

/// Two insertion-ordered maps kept in sync by hand.
#[derive(Default)]
struct IndexPair {
    forward: IndexMap<usize, usize>,
    backward: IndexMap<usize, usize>,
}

impl IndexPair {
    fn insert(&mut self, key: usize, value: usize) {
        if let Some(old) = self.forward.insert(key, value) {
            self.backward.shift_remove(&old);
        }
        if let Some(old_key) = self.backward.insert(value, key) {
            if old_key != key {
                self.forward.shift_remove(&old_key);
            }
        }
    }
}

fn filled_bidi(size: usize) -> BidiMap<usize, usize> {
    let mut map = BidiMap::default();
    for i in 0..size {
        map.put(i, i * 2);
    }
    map
}

fn filled_pair(size: usize) -> MapPair {
    let mut map = MapPair::default();
    for i in 0..size {
        map.insert(i, i * 2);
    }
    map
}

fn bench_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion");

    for &size in SIZES {
        group.throughput(criterion::Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("tether_bimap", size), &size, |b, &size| {
            b.iter(|| {
                let mut map: BidiMap<usize, usize> = BidiMap::default();
                for i in 0..size {
                    map.put(black_box(i), black_box(i * 2));
                }
                map
            })
        });

        group.bench_with_input(
            BenchmarkId::new("tether_bimap_preallocated", size),
            &size,
            |b, &size| {
                b.iter(|| {
                    let config = tether_bimap::Config::default().capacity(size);
                    let mut map: BidiMap<usize, usize> =
                        BidiMap::with_config_and_hasher(config, RandomState::default()).unwrap();
                    for i in 0..size {
                        map.put(black_box(i), black_box(i * 2));
                    }
                    map
                })
            },
        );

        group.bench_with_input(BenchmarkId::new("hashmap_pair", size), &size, |b, &size| {
            b.iter(|| {
                let mut map = MapPair::default();
                for i in 0..size {
                    map.insert(black_box(i), black_box(i * 2));
                }
                map
            })
        });

        group.bench_with_input(BenchmarkId::new("indexmap_pair", size), &size, |b, &size| {
            b.iter(|| {
                let mut map = IndexPair::default();
                for i in 0..size {
                    map.insert(black_box(i), black_box(i * 2));
                }
                map
            })
        });

        group.bench_with_input(BenchmarkId::new("hashlinked", size), &size, |b, &size| {
            b.iter(|| {
                let mut map = HashLinkedMap::default();
                for i in 0..size {
                    map.insert(black_box(i), black_box(i * 2));
                }
                map
            })
        });
    }

    group.finish();
}

fn bench_random_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_access");

    for &size in SIZES {
        let access_keys: Vec<usize> = (0..100).map(|_| rand::random_range(0..size)).collect();

        group.throughput(criterion::Throughput::Elements(access_keys.len() as u64));

        group.bench_with_input(BenchmarkId::new("tether_bimap", size), &size, |b, &size| {
            let map = filled_bidi(size);

            b.iter(|| {
                let mut sum = 0;
                for &key in &access_keys {
                    if let Some(value) = map.get(&black_box(key)) {
                        sum += *value;
                    }
                }
                sum
            })
        });

        group.bench_with_input(
            BenchmarkId::new("tether_bimap_inverse", size),
            &size,
            |b, &size| {
                let map = filled_bidi(size);

                b.iter(|| {
                    let mut sum = 0;
                    for &key in &access_keys {
                        if let Some(value) = map.inverse().get(&black_box(key * 2)) {
                            sum += *value;
                        }
                    }
                    sum
                })
            },
        );

        group.bench_with_input(BenchmarkId::new("hashmap_pair", size), &size, |b, &size| {
            let map = filled_pair(size);

            b.iter(|| {
                let mut sum = 0;
                for &key in &access_keys {
                    if let Some(value) = map.forward.get(&black_box(key)) {
                        sum += *value;
                    }
                }
                sum
            })
        });

        group.bench_with_input(
            BenchmarkId::new("hashmap_pair_inverse", size),
            &size,
            |b, &size| {
                let map = filled_pair(size);

                b.iter(|| {
                    let mut sum = 0;
                    for &key in &access_keys {
                        if let Some(value) = map.backward.get(&black_box(key * 2)) {
                            sum += *value;
                        }
                    }
                    sum
                })
            },
        );
    }

    group.finish();
}

fn bench_rebind(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebind");

    for &size in SIZES {
        let keys: Vec<usize> = (0..100).map(|_| rand::random_range(0..size)).collect();

        group.throughput(criterion::Throughput::Elements(keys.len() as u64));

        group.bench_with_input(BenchmarkId::new("tether_bimap", size), &size, |b, &size| {
            b.iter_batched(
                || filled_bidi(size),
                |mut map| {
                    for (i, &key) in keys.iter().enumerate() {
                        map.put(black_box(key), black_box(size * 2 + i));
                    }
                    map
                },
                criterion::BatchSize::SmallInput,
            )
        });

        group.bench_with_input(
            BenchmarkId::new("tether_bimap_inverse", size),
            &size,
            |b, &size| {
                b.iter_batched(
                    || filled_bidi(size),
                    |mut map| {
                        for (i, &key) in keys.iter().enumerate() {
                            map.inverse_mut()
                                .put(black_box(key * 2), black_box(size + i));
                        }
                        map
                    },
                    criterion::BatchSize::SmallInput,
                )
            },
        );

        group.bench_with_input(BenchmarkId::new("hashmap_pair", size), &size, |b, &size| {
            b.iter_batched(
                || filled_pair(size),
                |mut map| {
                    for (i, &key) in keys.iter().enumerate() {
                        map.insert(black_box(key), black_box(size * 2 + i));
                    }
                    map
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");

    for &size in SIZES {
        group.throughput(criterion::Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("tether_bimap", size), &size, |b, &size| {
            b.iter_batched(
                || filled_bidi(size),
                |mut map| {
                    let mut count = 0;
                    for i in 0..size {
                        if map.remove(&black_box(i)).is_some() {
                            count += 1;
                        }
                    }
                    count
                },
                criterion::BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("hashmap_pair", size), &size, |b, &size| {
            b.iter_batched(
                || filled_pair(size),
                |mut map| {
                    let mut count = 0;
                    for i in 0..size {
                        if map.remove(&black_box(i)).is_some() {
                            count += 1;
                        }
                    }
                    count
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration");

    for &size in SIZES {
        group.throughput(criterion::Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("tether_bimap", size), &size, |b, &size| {
            let map = filled_bidi(size);

            b.iter(|| {
                let mut sum = 0;
                for (key, value) in map.iter() {
                    sum += black_box(*key) + black_box(*value);
                }
                sum
            })
        });

        group.bench_with_input(
            BenchmarkId::new("tether_bimap_inverse", size),
            &size,
            |b, &size| {
                let map = filled_bidi(size);

                b.iter(|| {
                    let mut sum = 0;
                    for (value, key) in map.inverse().iter() {
                        sum += black_box(*key) + black_box(*value);
                    }
                    sum
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("tether_bimap_cursor", size),
            &size,
            |b, &size| {
                let map = filled_bidi(size);

                b.iter(|| {
                    let mut sum = 0;
                    let mut cursor = map.entry_cursor();
                    while let Ok((key, value)) = cursor.next(&map) {
                        sum += black_box(*key) + black_box(*value);
                    }
                    sum
                })
            },
        );

        group.bench_with_input(BenchmarkId::new("indexmap", size), &size, |b, &size| {
            let mut map = IndexMap::default();
            for i in 0..size {
                map.insert(i, i * 2);
            }

            b.iter(|| {
                let mut sum = 0;
                for (key, value) in map.iter() {
                    sum += black_box(*key) + black_box(*value);
                }
                sum
            })
        });

        group.bench_with_input(BenchmarkId::new("hashlinked", size), &size, |b, &size| {
            let mut map = HashLinkedMap::default();
            for i in 0..size {
                map.insert(i, i * 2);
            }

            b.iter(|| {
                let mut sum = 0;
                for (key, value) in map.iter() {
                    sum += black_box(*key) + black_box(*value);
                }
                sum
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insertion,
    bench_random_access,
    bench_rebind,
    bench_remove,
    bench_iteration,
);
criterion_main!(benches);
