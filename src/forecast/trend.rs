/// Ordinary least-squares trend line.
///
/// The default model. History timestamps are converted to fractional days
/// since the first observation, a line is fit by least squares, and the
/// projection extends the line one day at a time past the window. A
/// constant series fits with slope zero and yields constant forecasts.

use chrono::{DateTime, Utc};

use crate::model::ForecastError;

use super::{ForecastModel, MIN_HISTORY_POINTS};

const SECONDS_PER_DAY: f64 = 86_400.0;

pub struct LinearTrendModel;

impl ForecastModel for LinearTrendModel {
    fn name(&self) -> &'static str {
        "linear-trend"
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

        let origin = history[0].0;
        let xs: Vec<f64> = history
            .iter()
            .map(|(ts, _)| (*ts - origin).num_seconds() as f64 / SECONDS_PER_DAY)
            .collect();
        let ys: Vec<f64> = history.iter().map(|(_, v)| *v).collect();

        let n = xs.len() as f64;
        let mean_x = xs.iter().sum::<f64>() / n;
        let mean_y = ys.iter().sum::<f64>() / n;

        let denom: f64 = xs.iter().map(|x| (x - mean_x).powi(2)).sum();
        if denom == 0.0 {
            // Every point shares one timestamp; no slope is identifiable.
            return Err(ForecastError::DegenerateSeries(
                "all observations share a single timestamp".to_string(),
            ));
        }

        let numer: f64 = xs
            .iter()
            .zip(&ys)
            .map(|(x, y)| (x - mean_x) * (y - mean_y))
            .sum();
        let slope = numer / denom;
        let intercept = mean_y - slope * mean_x;

        if !slope.is_finite() || !intercept.is_finite() {
            return Err(ForecastError::NumericalError(format!(
                "non-finite fit: slope={}, intercept={}",
                slope, intercept
            )));
        }

        let last_x = xs[xs.len() - 1];
        Ok((1..=horizon)
            .map(|step| intercept + slope * (last_x + step as f64))
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
