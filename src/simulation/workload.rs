//! Seeded request workloads for headless runs
//!
//! Reproducible: the same seed always yields the same request trace.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate `count` floor requests at random times, gaps uniform in
/// [0, max_gap], floors uniform in [0, floor_count). Returned in
/// chronological order as (simulated time, floor) pairs.
pub fn generate_requests(
    seed: u64,
    count: usize,
    floor_count: usize,
    max_gap: Duration,
) -> Vec<(Duration, usize)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let max_gap_ms = max_gap.as_millis() as u64;
    let mut at = Duration::ZERO;
    (0..count)
        .map(|_| {
            at += Duration::from_millis(rng.random_range(0..=max_gap_ms));
            (at, rng.random_range(0..floor_count))
        })
        .collect()
}
