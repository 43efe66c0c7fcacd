use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const SHORT_RUNTIME_SAMPLE_SIZE: usize = 15;
const SHORT_RUNTIME_WARM_UP_MS: u64 = 100;
const SHORT_RUNTIME_MEASURE_MS: u64 = 250;
const LONG_RUNTIME_SAMPLE_SIZE: usize = 10;
const LONG_RUNTIME_WARM_UP_MS: u64 = 700;
const LONG_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x05E7_5EED;

/// Group config for benchmarks whose single iteration is cheap.
pub fn apply_short_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SHORT_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SHORT_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SHORT_RUNTIME_MEASURE_MS));
}

/// Group config for benchmarks that rebuild large structures per iteration.
pub fn apply_long_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LONG_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LONG_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LONG_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// `len` distinct keys in shuffled order; deterministic for a given rng state.
pub fn shuffled_keys<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<u64> {
    // Odd multiplier: the mapping is a bijection on u64, so keys are distinct.
    let mut keys = (0..len as u64)
        .map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .collect::<Vec<_>>();
    keys.shuffle(rng);
    keys
}
