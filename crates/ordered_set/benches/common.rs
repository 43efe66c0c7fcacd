use std::hint::black_box;
use std::time::{Duration, Instant};

use bench::{apply_long_runtime_config, apply_short_runtime_config, shuffled_keys};
use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, BenchmarkId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ordered_set::{OrderedSet, RbTreeSet, StdBTreeSet};

const SIZES: [usize; 4] = [1_000, 8_000, 64_000, 256_000];
const PROBES_PER_ITER: usize = 200;
const FIND_HIT_RATE_PERCENT: u64 = 80;

pub fn bench_put<S, T>(group: &mut BenchmarkGroup<'_, T>, label: &str)
where
    T: Measurement<Value = Duration>,
    S: OrderedSet<Value = u64>,
{
    for &size in &SIZES {
        apply_long_runtime_config(group);
        let mut rng = StdRng::seed_from_u64(seed_base(1, size as u64));
        let keys = shuffled_keys(&mut rng, size);
        bench_build::<S, T>(group, label, size, &keys);
    }
}

pub fn bench_put_ascending<S, T>(group: &mut BenchmarkGroup<'_, T>, label: &str)
where
    T: Measurement<Value = Duration>,
    S: OrderedSet<Value = u64>,
{
    for &size in &SIZES {
        apply_long_runtime_config(group);
        let keys = (0..size as u64).collect::<Vec<_>>();
        bench_build::<S, T>(group, label, size, &keys);
    }
}

fn bench_build<S, T>(group: &mut BenchmarkGroup<'_, T>, label: &str, size: usize, keys: &[u64])
where
    T: Measurement<Value = Duration>,
    S: OrderedSet<Value = u64>,
{
    group.bench_function(BenchmarkId::new(label, size), |bencher| {
        bencher.iter_custom(|iters| {
            let mut total = Duration::ZERO;
            for _ in 0..iters {
                let start = Instant::now();
                let mut set = S::new();
                for &key in keys {
                    set.put(key);
                }
                black_box(set.len());
                total += start.elapsed();
            }
            total
        })
    });
}

pub fn bench_find<S, T>(group: &mut BenchmarkGroup<'_, T>, label: &str)
where
    T: Measurement<Value = Duration>,
    S: OrderedSet<Value = u64>,
{
    for &size in &SIZES {
        apply_short_runtime_config(group);
        let base_seed = seed_base(2, size as u64);
        let mut rng = StdRng::seed_from_u64(base_seed);
        let keys = shuffled_keys(&mut rng, size);
        let mut set = S::new();
        for &key in &keys {
            set.put(key);
        }

        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter_custom(|iters| {
                let mut total = Duration::ZERO;
                for iter in 0..iters {
                    let mut rng = StdRng::seed_from_u64(seed_for_iter(base_seed, iter));
                    let probes = generate_probes(&keys, &mut rng);
                    let start = Instant::now();
                    for probe in &probes {
                        black_box(set.contains(probe));
                    }
                    total += start.elapsed();
                }
                total
            })
        });
    }
}

fn generate_probes(keys: &[u64], rng: &mut StdRng) -> Vec<u64> {
    (0..PROBES_PER_ITER)
        .map(|_| {
            let hit = rng.random_range(0..100) < FIND_HIT_RATE_PERCENT;
            if hit {
                keys[rng.random_range(0..keys.len())]
            } else {
                rng.random()
            }
        })
        .collect()
}

fn seed_base(workload_id: u64, size: u64) -> u64 {
    mix_seed(0x5E7B_A5E1_2026_0000_u64 ^ (workload_id << 48) ^ size)
}

fn seed_for_iter(base: u64, iter: u64) -> u64 {
    mix_seed(base ^ iter.wrapping_mul(SEED_MIX))
}

const SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

pub fn bench_all_put<T>(group: &mut BenchmarkGroup<'_, T>)
where
    T: Measurement<Value = Duration>,
{
    bench_put::<StdBTreeSet<u64>, _>(group, "std_btree");
    bench_put::<RbTreeSet<u64>, _>(group, "rb");
}

pub fn bench_all_put_ascending<T>(group: &mut BenchmarkGroup<'_, T>)
where
    T: Measurement<Value = Duration>,
{
    bench_put_ascending::<StdBTreeSet<u64>, _>(group, "std_btree");
    bench_put_ascending::<RbTreeSet<u64>, _>(group, "rb");
}

pub fn bench_all_find<T>(group: &mut BenchmarkGroup<'_, T>)
where
    T: Measurement<Value = Duration>,
{
    bench_find::<StdBTreeSet<u64>, _>(group, "std_btree");
    bench_find::<RbTreeSet<u64>, _>(group, "rb");
}
