/// Seasonal-naive forecaster.
///
/// Detects a repeating cycle in the daily series by autocorrelation and
/// projects by replaying the last observed cycle. With no detectable cycle
/// (including constant series, where autocorrelation is undefined) it
/// degrades to last-value naive. The series is one point per day, so only
/// multi-day periods are searched — there is no sub-daily component.

use chrono::{DateTime, Utc};

use crate::model::ForecastError;

use super::{ForecastModel, MIN_HISTORY_POINTS};

/// Minimum autocorrelation for a lag to count as a cycle.
const ACF_THRESHOLD: f64 = 0.3;

pub struct SeasonalNaiveModel;

/// Detect a cycle length via autocorrelation. Returns `None` when the
/// series is too short, constant, or shows no lag with autocorrelation
/// above `ACF_THRESHOLD`. Lags run from 2 up to half the series length;
/// lag 1 is just persistence, not seasonality.
pub fn detect_period(values: &[f64]) -> Option<usize> {
    let n = values.len();
    if n < 4 {
        return None;
    }

    let mean: f64 = values.iter().sum::<f64>() / n as f64;
    let var: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    if var == 0.0 {
        return None;
    }

    let mut best_period = 0;
    let mut best_acf = 0.0;
    for lag in 2..=n / 2 {
        let acf: f64 = values
            .iter()
            .take(n - lag)
            .zip(values.iter().skip(lag))
            .map(|(a, b)| (a - mean) * (b - mean))
            .sum::<f64>()
            / var;
        if acf > best_acf && acf > ACF_THRESHOLD {
            best_acf = acf;
            best_period = lag;
        }
    }

    if best_period > 0 { Some(best_period) } else { None }
}

impl ForecastModel for SeasonalNaiveModel {
    fn name(&self) -> &'static str {
        "seasonal-naive"
    }

    fn forecast(
        &self,
        history: &[(DateTime<Utc>, f64)],
        horizon: usize,
    ) -> Result<Vec<f64>, ForecastError> {
        if history.len() < MIN_HISTORY_POINTS {
            return Err(ForecastError::InsufficientHistory {
                required: MIN_HISTORY_POINTS,
                actual: history.len(),
            });
        }

        let values: Vec<f64> = history.iter().map(|(_, v)| *v).collect();
        let n = values.len();

        let predicted = match detect_period(&values) {
            Some(period) => (0..horizon)
                .map(|step| values[n - period + (step % period)])
                .collect(),
            // No cycle: repeat the last observation.
            None => vec![values[n - 1]; horizon],
        };

        Ok(predicted)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
