/// Core data types for the clinic operations analytics service.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no logic beyond simple accessors, no I/O, and no external
/// dependencies apart from serde derives — only types.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Metrics
// ---------------------------------------------------------------------------

/// The tracked clinical metrics, in canonical enumeration order.
///
/// Every stage of the pipeline (generation, aggregation, forecasting,
/// threshold checks) iterates metrics in this order so that generated data,
/// aggregates, forecast columns, and thresholds stay aligned. The enum is
/// closed: an unknown metric is unrepresentable by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MetricKind {
    Treated,
    Vaccinated,
    Tested,
    HighBpCases,
}

impl MetricKind {
    /// All metrics in canonical order.
    pub const ALL: [MetricKind; 4] = [
        MetricKind::Treated,
        MetricKind::Vaccinated,
        MetricKind::Tested,
        MetricKind::HighBpCases,
    ];

    /// Number of tracked metrics.
    pub const COUNT: usize = MetricKind::ALL.len();

    /// Position of this metric in `ALL`. Used to index per-metric arrays.
    pub fn index(self) -> usize {
        match self {
            MetricKind::Treated => 0,
            MetricKind::Vaccinated => 1,
            MetricKind::Tested => 2,
            MetricKind::HighBpCases => 3,
        }
    }

    /// Display label matching the dashboard column headers.
    pub fn label(self) -> &'static str {
        match self {
            MetricKind::Treated => "Treated",
            MetricKind::Vaccinated => "Vaccinated",
            MetricKind::Tested => "Tested",
            MetricKind::HighBpCases => "High_BP_Cases",
        }
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Observations
// ---------------------------------------------------------------------------

/// One day's metric values for one region.
///
/// `day` is a zero-based sequence index, not a calendar date; the forecaster
/// maps it onto a synthetic timestamp axis before fitting. The full dataset
/// is an ordered sequence of observations, one per (day, region) pair, with
/// days ascending. Observations are immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Observation {
    pub day: u32,
    pub region_code: &'static str,
    /// One value per metric, indexed by `MetricKind::index`.
    pub values: [u32; MetricKind::COUNT],
}

impl Observation {
    /// The recorded value for `metric` on this day.
    pub fn value(&self, metric: MetricKind) -> u32 {
        self.values[metric.index()]
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Recoverable per-metric forecasting failures.
///
/// A failed fit skips that metric's forecast column; it never aborts the
/// run. All other metrics and every other pipeline stage still produce
/// output.
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// The historical series has too few points to fit a model.
    InsufficientHistory { required: usize, actual: usize },
    /// The series is degenerate for the chosen model (e.g. every
    /// observation falls on the same timestamp).
    DegenerateSeries(String),
    /// The fit produced a non-finite coefficient.
    NumericalError(String),
}

impl std::fmt::Display for ForecastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForecastError::InsufficientHistory { required, actual } => {
                write!(f, "insufficient history: need {} points, have {}", required, actual)
            }
            ForecastError::DegenerateSeries(msg) => write!(f, "degenerate series: {}", msg),
            ForecastError::NumericalError(msg) => write!(f, "numerical error: {}", msg),
        }
    }
}

impl std::error::Error for ForecastError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_order_is_stable() {
        // The enumeration order is load-bearing: aggregates, forecast
        // columns, and thresholds are all indexed by it.
        assert_eq!(MetricKind::ALL[0], MetricKind::Treated);
        assert_eq!(MetricKind::ALL[1], MetricKind::Vaccinated);
        assert_eq!(MetricKind::ALL[2], MetricKind::Tested);
        assert_eq!(MetricKind::ALL[3], MetricKind::HighBpCases);
    }

    #[test]
    fn test_metric_index_matches_position_in_all() {
        for (i, metric) in MetricKind::ALL.iter().enumerate() {
            assert_eq!(
                metric.index(),
                i,
                "index() for {} must match its position in ALL",
                metric
            );
        }
    }

    #[test]
    fn test_metric_labels_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for metric in MetricKind::ALL {
            assert!(
                seen.insert(metric.label()),
                "duplicate metric label '{}'",
                metric.label()
            );
        }
    }

    #[test]
    fn test_observation_value_accessor() {
        let obs = Observation {
            day: 3,
            region_code: "central",
            values: [55, 20, 41, 7],
        };
        assert_eq!(obs.value(MetricKind::Treated), 55);
        assert_eq!(obs.value(MetricKind::Vaccinated), 20);
        assert_eq!(obs.value(MetricKind::Tested), 41);
        assert_eq!(obs.value(MetricKind::HighBpCases), 7);
    }

    #[test]
    fn test_forecast_error_messages_name_the_cause() {
        let err = ForecastError::InsufficientHistory { required: 2, actual: 1 };
        assert!(err.to_string().contains("need 2 points, have 1"));

        let err = ForecastError::DegenerateSeries("single timestamp".to_string());
        assert!(err.to_string().contains("degenerate"));
    }
}
