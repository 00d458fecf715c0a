/// Data organization utilities for the analytics pipeline.
///
/// This module provides the aggregation and series-extraction helpers that
/// sit between the generator and the downstream consumers (the hotspot
/// classifier reads aggregates; the forecaster reads per-region series).
///
/// Submodules:
/// - `aggregate` — per-region metric sums and per-metric grand totals.
/// - `series` — restricts the flat observation sequence to one region and
///   metric, in day order, for model fitting.

pub mod aggregate;
pub mod series;
