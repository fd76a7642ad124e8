use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;
const SMALL_SIZE_LIMIT: usize = 4_096;
const MEDIUM_SIZE_LIMIT: usize = 65_536;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

/// Picks the small, medium or large preset by input size.
pub fn apply_runtime_config_for_size<M: Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    size: usize,
) {
    if size <= SMALL_SIZE_LIMIT {
        apply_small_runtime_config(group);
    } else if size <= MEDIUM_SIZE_LIMIT {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// `n` distinct keys spread over a wide range, in random order.
pub fn shuffled_distinct_keys<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<i64> {
    let stride = rng.random_range(1..=1_000_i64);
    let offset = rng.random_range(-1_000_000_000..=1_000_000_000_i64);
    let mut keys: Vec<i64> = (0..n as i64).map(|i| offset + i * stride).collect();
    keys.shuffle(rng);
    keys
}

/// `n` keys drawn from `0..distinct`, so most draws repeat once `n > distinct`.
pub fn keys_with_repeats<R: Rng + ?Sized>(rng: &mut R, n: usize, distinct: usize) -> Vec<i64> {
    let upper = distinct.max(1) as i64;
    (0..n).map(|_| rng.random_range(0..upper)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn shuffled_keys_are_distinct() {
        let mut rng = default_rng();
        let keys = shuffled_distinct_keys(&mut rng, 1_000);
        assert_eq!(keys.len(), 1_000);
        let unique: HashSet<i64> = keys.iter().copied().collect();
        assert_eq!(unique.len(), keys.len());
    }

    #[test]
    fn repeated_keys_stay_in_range() {
        let mut rng = default_rng();
        let keys = keys_with_repeats(&mut rng, 500, 16);
        assert_eq!(keys.len(), 500);
        assert!(keys.iter().all(|&k| (0..16).contains(&k)));
    }

    #[test]
    fn default_rng_is_deterministic() {
        let a: Vec<u64> = (0..4).map(|_| default_rng().random()).collect();
        assert!(a.windows(2).all(|w| w[0] == w[1]));
    }
}
