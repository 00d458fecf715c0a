/// Hotspot classification.
///
/// A stateless pure function from (aggregate totals, thresholds) to an
/// outcome. A hotspot is a region whose windowed total for a metric
/// strictly exceeds that metric's threshold; a total exactly at the
/// threshold is not a hotspot. The "no hotspots" case is an explicit
/// outcome variant, so the presentation layer can always distinguish
/// "checked, none found" from "not yet checked".

use serde::Serialize;

use crate::analysis::aggregate::AggregateReport;
use crate::config::Thresholds;
use crate::model::MetricKind;

// ---------------------------------------------------------------------------
// Outcome types
// ---------------------------------------------------------------------------

/// One region/metric pair over threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HotspotAlert {
    pub region_code: &'static str,
    pub metric: MetricKind,
    pub total: u64,
    pub threshold: u64,
}

impl std::fmt::Display for HotspotAlert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} has high {} ({})", self.region_code, self.metric, self.total)
    }
}

/// Result of a classification pass.
///
/// `Alerts` is never empty — zero exceedances produce `AllClear` instead
/// of an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "alerts", rename_all = "snake_case")]
pub enum HotspotOutcome {
    Alerts(Vec<HotspotAlert>),
    AllClear,
}

impl HotspotOutcome {
    /// The alerts, or an empty slice for `AllClear`.
    pub fn alerts(&self) -> &[HotspotAlert] {
        match self {
            HotspotOutcome::Alerts(alerts) => alerts,
            HotspotOutcome::AllClear => &[],
        }
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Compare every region's totals against the per-metric thresholds.
///
/// Alert order is deterministic: regions in aggregate-report order (which
/// the pipeline builds in registry order), metrics in enumeration order
/// within each region.
pub fn classify(aggregates: &AggregateReport, thresholds: &Thresholds) -> HotspotOutcome {
    let mut alerts = Vec::new();

    for region in &aggregates.per_region {
        for metric in MetricKind::ALL {
            let total = region.total(metric);
            let threshold = thresholds.for_metric(metric);
            if total > threshold {
                alerts.push(HotspotAlert {
                    region_code: region.region_code,
                    metric,
                    total,
                    threshold,
                });
            }
        }
    }

    if alerts.is_empty() {
        HotspotOutcome::AllClear
    } else {
        HotspotOutcome::Alerts(alerts)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Observation;

    fn thresholds(treated: u64, vaccinated: u64, tested: u64, high_bp: u64) -> Thresholds {
        Thresholds {
            treated,
            vaccinated,
            tested,
            high_bp_cases: high_bp,
        }
    }

    fn aggregates(entries: &[(&'static str, [u32; 4])]) -> AggregateReport {
        let observations: Vec<Observation> = entries
            .iter()
            .map(|(code, values)| Observation {
                day: 0,
                region_code: code,
                values: *values,
            })
            .collect();
        AggregateReport::from_observations(&observations)
    }

    #[test]
    fn test_single_region_over_threshold_yields_one_alert() {
        // The canonical scenario: Treated threshold 300, totals A=310 and
        // B=290 — exactly one alert, for A, and its message names the total.
        let report = aggregates(&[("a", [310, 0, 0, 0]), ("b", [290, 0, 0, 0])]);
        let outcome = classify(&report, &thresholds(300, 1_000, 1_000, 1_000));

        let alerts = outcome.alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].region_code, "a");
        assert_eq!(alerts[0].metric, MetricKind::Treated);
        assert_eq!(alerts[0].total, 310);
        assert_eq!(alerts[0].to_string(), "a has high Treated (310)");
    }

    #[test]
    fn test_total_exactly_at_threshold_is_not_a_hotspot() {
        let report = aggregates(&[("a", [300, 0, 0, 0])]);
        let outcome = classify(&report, &thresholds(300, 1_000, 1_000, 1_000));
        assert_eq!(
            outcome,
            HotspotOutcome::AllClear,
            "threshold comparison is strictly greater-than, not >="
        );
    }

    #[test]
    fn test_all_clear_iff_no_pair_exceeds() {
        let report = aggregates(&[("a", [10, 10, 10, 1]), ("b", [20, 20, 20, 2])]);
        let outcome = classify(&report, &thresholds(100, 100, 100, 100));
        assert_eq!(outcome, HotspotOutcome::AllClear);
        assert!(outcome.alerts().is_empty());
    }

    #[test]
    fn test_alert_order_is_region_then_metric() {
        // Both regions exceed two metrics each; ordering must be region
        // appearance order, then metric enumeration order within a region.
        let report = aggregates(&[("a", [500, 500, 0, 0]), ("b", [500, 0, 0, 500])]);
        let outcome = classify(&report, &thresholds(100, 100, 100, 100));

        let keys: Vec<_> = outcome
            .alerts()
            .iter()
            .map(|a| (a.region_code, a.metric))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("a", MetricKind::Treated),
                ("a", MetricKind::Vaccinated),
                ("b", MetricKind::Treated),
                ("b", MetricKind::HighBpCases),
            ]
        );
    }

    #[test]
    fn test_each_metric_uses_its_own_threshold() {
        let report = aggregates(&[("a", [50, 50, 50, 50])]);
        // Only the High_BP_Cases threshold is low enough to trip.
        let outcome = classify(&report, &thresholds(100, 100, 100, 40));
        let alerts = outcome.alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].metric, MetricKind::HighBpCases);
        assert_eq!(alerts[0].threshold, 40);
    }

    #[test]
    fn test_empty_aggregates_are_all_clear() {
        let report = AggregateReport::from_observations(&[]);
        let outcome = classify(&report, &Thresholds::default());
        assert_eq!(outcome, HotspotOutcome::AllClear);
    }
}
