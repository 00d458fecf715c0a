/// Per-region, per-metric time-series forecasting.
///
/// Each metric is fit and projected independently for a region — no
/// cross-metric correlation modeling. The model seam is the
/// `ForecastModel` trait: anything that can turn a (timestamp, value)
/// history into N future values plugs in here. Two implementations ship:
/// a least-squares trend line (`trend`) and a seasonal-naive repeater
/// (`naive`).
///
/// Failures are per-metric and recoverable: a metric whose fit fails is
/// reported unavailable and logged, and every other column still renders.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analysis::series;
use crate::config::ModelChoice;
use crate::logging;
use crate::model::{ForecastError, MetricKind, Observation};

pub mod naive;
pub mod trend;

pub use naive::SeasonalNaiveModel;
pub use trend::LinearTrendModel;

// ---------------------------------------------------------------------------
// Model seam
// ---------------------------------------------------------------------------

/// Minimum history length any shipped model will fit on.
pub const MIN_HISTORY_POINTS: usize = 2;

/// A forecasting model: fit on (timestamp, value) history, project
/// `horizon` future values at the same daily spacing.
///
/// Implementations must return exactly `horizon` values on success, in
/// chronological order, and must signal every failure through
/// `ForecastError` — never panic on degenerate input.
pub trait ForecastModel {
    /// Short name for logs and reports.
    fn name(&self) -> &'static str;

    /// Fit on `history` and project `horizon` future values.
    fn forecast(
        &self,
        history: &[(DateTime<Utc>, f64)],
        horizon: usize,
    ) -> Result<Vec<f64>, ForecastError>;
}

/// Construct the configured model.
pub fn model_for(choice: ModelChoice) -> Box<dyn ForecastModel> {
    match choice {
        ModelChoice::Linear => Box::new(LinearTrendModel),
        ModelChoice::SeasonalNaive => Box::new(SeasonalNaiveModel),
    }
}

// ---------------------------------------------------------------------------
// Forecast output
// ---------------------------------------------------------------------------

/// One future day's predictions. Columns that failed to fit are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastRow {
    /// Future day index, continuing the historical sequence.
    pub day: u32,
    /// One prediction per metric, indexed by `MetricKind::index`.
    pub values: [Option<f64>; MetricKind::COUNT],
}

impl ForecastRow {
    /// The predicted value for `metric`, if its fit succeeded.
    pub fn value(&self, metric: MetricKind) -> Option<f64> {
        self.values[metric.index()]
    }
}

/// A metric whose forecast is unavailable this run, with the reason.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnavailableMetric {
    pub metric: MetricKind,
    pub reason: String,
}

/// The forecast table for one region: `rows.len()` equals the requested
/// horizon (day indices strictly increasing, starting immediately after
/// the historical window), unless the region had no history at all, in
/// which case `rows` is empty and every metric is listed unavailable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionForecast {
    pub region_code: &'static str,
    pub model: &'static str,
    pub rows: Vec<ForecastRow>,
    pub unavailable: Vec<UnavailableMetric>,
}

// ---------------------------------------------------------------------------
// Orchestration
// ---------------------------------------------------------------------------

/// Forecast every metric for one region.
///
/// Predictions are clamped at zero: the metrics are daily counts, and a
/// downward trend extrapolated past the axis would otherwise produce
/// negative patients.
pub fn forecast_region(
    observations: &[Observation],
    region_code: &'static str,
    horizon: u32,
    model: &dyn ForecastModel,
) -> RegionForecast {
    let last_day = observations
        .iter()
        .filter(|o| o.region_code == region_code)
        .map(|o| o.day)
        .max();

    let Some(last_day) = last_day else {
        // No history for this region: every column is unavailable.
        let unavailable = MetricKind::ALL
            .into_iter()
            .map(|metric| UnavailableMetric {
                metric,
                reason: ForecastError::InsufficientHistory {
                    required: MIN_HISTORY_POINTS,
                    actual: 0,
                }
                .to_string(),
            })
            .collect();
        return RegionForecast {
            region_code,
            model: model.name(),
            rows: Vec::new(),
            unavailable,
        };
    };

    let mut rows: Vec<ForecastRow> = (1..=horizon)
        .map(|offset| ForecastRow {
            day: last_day + offset,
            values: [None; MetricKind::COUNT],
        })
        .collect();
    let mut unavailable = Vec::new();

    for metric in MetricKind::ALL {
        let history = series::timestamped_history(observations, region_code, metric);
        match model.forecast(&history, horizon as usize) {
            Ok(values) => {
                for (row, value) in rows.iter_mut().zip(values) {
                    row.values[metric.index()] = Some(value.max(0.0));
                }
            }
            Err(err) => {
                logging::log_forecast_failure(region_code, metric, &err);
                unavailable.push(UnavailableMetric {
                    metric,
                    reason: err.to_string(),
                });
            }
        }
    }

    RegionForecast {
        region_code,
        model: model.name(),
        rows,
        unavailable,
    }
}

/// Forecast every region in the registry slice, in order.
pub fn forecast_all_regions(
    observations: &[Observation],
    regions: &[crate::regions::Region],
    horizon: u32,
    choice: ModelChoice,
) -> Vec<RegionForecast> {
    let model = model_for(choice);
    regions
        .iter()
        .map(|region| forecast_region(observations, region.code, horizon, model.as_ref()))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Observation;

    fn constant_region(days: u32, value: u32) -> Vec<Observation> {
        (0..days)
            .map(|day| Observation {
                day,
                region_code: "central",
                values: [value; MetricKind::COUNT],
            })
            .collect()
    }

    #[test]
    fn test_forecast_has_exactly_horizon_rows_with_increasing_days() {
        let observations = constant_region(10, 50);
        let model = LinearTrendModel;
        let forecast = forecast_region(&observations, "central", 7, &model);

        assert_eq!(forecast.rows.len(), 7);
        for (i, row) in forecast.rows.iter().enumerate() {
            assert_eq!(
                row.day,
                10 + i as u32,
                "forecast days must continue the window without gaps"
            );
        }
    }

    #[test]
    fn test_constant_series_forecasts_constant_or_unavailable_never_panics() {
        let observations = constant_region(10, 50);
        for choice in [ModelChoice::Linear, ModelChoice::SeasonalNaive] {
            let model = model_for(choice);
            let forecast = forecast_region(&observations, "central", 7, model.as_ref());
            for metric in MetricKind::ALL {
                let skipped = forecast.unavailable.iter().any(|u| u.metric == metric);
                if skipped {
                    continue;
                }
                for row in &forecast.rows {
                    let value = row.value(metric).expect("fitted metric must fill every row");
                    assert!(
                        (value - 50.0).abs() < 1e-9,
                        "{:?} forecast of a constant-50 series should be 50, got {}",
                        choice,
                        value
                    );
                }
            }
        }
    }

    #[test]
    fn test_too_short_history_is_reported_unavailable() {
        let observations = constant_region(1, 50);
        let model = LinearTrendModel;
        let forecast = forecast_region(&observations, "central", 7, &model);

        assert_eq!(
            forecast.unavailable.len(),
            MetricKind::COUNT,
            "one observation is below MIN_HISTORY_POINTS for every metric"
        );
        for row in &forecast.rows {
            for metric in MetricKind::ALL {
                assert!(row.value(metric).is_none());
            }
        }
    }

    #[test]
    fn test_missing_region_lists_every_metric_unavailable() {
        let observations = constant_region(10, 50);
        let model = LinearTrendModel;
        let forecast = forecast_region(&observations, "atlantis", 7, &model);
        assert!(forecast.rows.is_empty());
        assert_eq!(forecast.unavailable.len(), MetricKind::COUNT);
    }

    #[test]
    fn test_downward_trend_is_clamped_at_zero() {
        // High_BP_Cases falling 9, 8, ..., 0 extrapolates negative; the
        // report must floor it at zero — these are counts.
        let observations: Vec<Observation> = (0..10)
            .map(|day| Observation {
                day,
                region_code: "central",
                values: [50, 20, 40, 9 - day],
            })
            .collect();
        let model = LinearTrendModel;
        let forecast = forecast_region(&observations, "central", 7, &model);
        for row in &forecast.rows {
            let value = row
                .value(MetricKind::HighBpCases)
                .expect("trend on a clean line must fit");
            assert!(value >= 0.0, "clamped forecast went negative: {}", value);
        }
    }

    #[test]
    fn test_forecast_all_regions_covers_registry_in_order() {
        use crate::regions::REGION_REGISTRY;
        use crate::synth;

        let observations = synth::generate(14, REGION_REGISTRY, 42);
        let forecasts =
            forecast_all_regions(&observations, REGION_REGISTRY, 5, ModelChoice::Linear);
        assert_eq!(forecasts.len(), REGION_REGISTRY.len());
        for (forecast, region) in forecasts.iter().zip(REGION_REGISTRY) {
            assert_eq!(forecast.region_code, region.code);
            assert_eq!(forecast.rows.len(), 5);
        }
    }
}
