/// Synthetic observation generator.
///
/// Live reporting feeds are out of scope for this service; the dashboard
/// runs on a simulated historical window instead. Generation is pure and
/// deterministic under a fixed seed, so tests and repeated renders see the
/// exact same dataset.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

use crate::model::{MetricKind, Observation};
use crate::regions::Region;

// ---------------------------------------------------------------------------
// Sampling ranges
// ---------------------------------------------------------------------------

/// Half-open sampling range for one day's value of `metric`.
pub fn sample_range(metric: MetricKind) -> Range<u32> {
    match metric {
        MetricKind::Treated => 20..100,
        MetricKind::Vaccinated => 10..50,
        MetricKind::Tested => 30..80,
        MetricKind::HighBpCases => 0..10,
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generate `history_days` observations for every region in `regions`.
///
/// Output is day-major: all regions for day 0, then all regions for day 1,
/// and so on, with regions in the order given. Each metric value is drawn
/// independently from its bounded uniform range. The same
/// (seed, history_days, regions) always yields the same dataset.
pub fn generate(history_days: u32, regions: &[Region], seed: u64) -> Vec<Observation> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut observations =
        Vec::with_capacity(history_days as usize * regions.len());

    for day in 0..history_days {
        for region in regions {
            let mut values = [0u32; MetricKind::COUNT];
            for metric in MetricKind::ALL {
                values[metric.index()] = rng.gen_range(sample_range(metric));
            }
            observations.push(Observation {
                day,
                region_code: region.code,
                values,
            });
        }
    }

    observations
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
