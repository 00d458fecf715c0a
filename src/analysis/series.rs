/// Per-region series extraction.
///
/// The forecaster fits each (region, metric) pair independently; this
/// module restricts the flat observation sequence to one region and one
/// metric, preserving day order, and maps the integer day index onto the
/// synthetic timestamp axis the models fit against.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::model::{MetricKind, Observation};

// ---------------------------------------------------------------------------
// Synthetic timestamp axis
// ---------------------------------------------------------------------------

/// Day 0 of the synthetic axis. The generator's `day` is a sequence index,
/// not a calendar date, so the axis anchor is arbitrary — it only has to
/// be fixed and continuous. One observation per day means there is no
/// sub-daily seasonal structure to model.
pub fn synthetic_epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// Maps a day index onto the synthetic timestamp axis.
pub fn day_to_timestamp(day: u32) -> DateTime<Utc> {
    synthetic_epoch() + Duration::days(i64::from(day))
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// The (day, value) history for one region and metric, in day order.
pub fn metric_history(
    observations: &[Observation],
    region_code: &str,
    metric: MetricKind,
) -> Vec<(u32, u32)> {
    observations
        .iter()
        .filter(|o| o.region_code == region_code)
        .map(|o| (o.day, o.value(metric)))
        .collect()
}

/// Same history on the synthetic timestamp axis, as the `(timestamp, f64)`
/// pairs the forecast models fit against.
pub fn timestamped_history(
    observations: &[Observation],
    region_code: &str,
    metric: MetricKind,
) -> Vec<(DateTime<Utc>, f64)> {
    metric_history(observations, region_code, metric)
        .into_iter()
        .map(|(day, value)| (day_to_timestamp(day), f64::from(value)))
        .collect()
}

/// The last observed day index in the window, if any. Forecast output
/// starts at the day immediately after this.
pub fn last_day(observations: &[Observation]) -> Option<u32> {
    observations.iter().map(|o| o.day).max()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
