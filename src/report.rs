/// Dashboard report assembly.
///
/// This is the pipeline's composition root: generator → aggregator and
/// forecaster → hotspot classifier, with the census and inventory checks
/// alongside, all collected into one plain `DashboardReport` value. The
/// presentation layer consumes that value — there is no shared render
/// context, and a partially failed forecast still yields a complete
/// report.

use chrono::Utc;
use serde::Serialize;

use crate::alert::hotspots::{self, HotspotOutcome};
use crate::alert::stock::{self, StockItem};
use crate::analysis::aggregate::AggregateReport;
use crate::census::{self, CaseRecord, TreatmentRecommendation};
use crate::config::Config;
use crate::forecast::{self, RegionForecast};
use crate::logging::{self, Stage};
use crate::model::MetricKind;
use crate::regions::REGION_REGISTRY;
use crate::synth;

// ---------------------------------------------------------------------------
// Report types
// ---------------------------------------------------------------------------

/// City-wide total for one metric over the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricSummary {
    pub metric: MetricKind,
    pub total: u64,
}

/// Everything one dashboard render needs, as plain data.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    /// Render timestamp, RFC 3339.
    pub generated_at: String,
    pub total_patients: u32,
    /// Per-metric grand totals, in metric enumeration order.
    pub metric_summaries: Vec<MetricSummary>,
    /// Per-region totals feeding the hotspot table.
    pub aggregates: AggregateReport,
    /// Inventory rows below their reorder threshold; empty = fully stocked.
    pub low_stock: Vec<StockItem>,
    /// Cases currently under treatment.
    pub active_cases: Vec<CaseRecord>,
    pub recommendations: Vec<TreatmentRecommendation>,
    /// One forecast table per region, in registry order.
    pub forecasts: Vec<RegionForecast>,
    pub hotspots: HotspotOutcome,
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Run the full pipeline under `config` and assemble the report.
pub fn build_report(config: &Config) -> DashboardReport {
    let sim = &config.simulation;
    logging::info(
        Stage::Synth,
        None,
        &format!(
            "generating {} days for {} regions (seed {})",
            sim.history_days,
            REGION_REGISTRY.len(),
            sim.seed
        ),
    );
    let observations = synth::generate(sim.history_days, REGION_REGISTRY, sim.seed);

    let aggregates = AggregateReport::from_observations(&observations);
    logging::info(
        Stage::Aggregate,
        None,
        &format!("summed {} observations", observations.len()),
    );

    let forecasts = forecast::forecast_all_regions(
        &observations,
        REGION_REGISTRY,
        config.forecast.horizon_days,
        config.forecast.model,
    );
    let skipped: usize = forecasts.iter().map(|f| f.unavailable.len()).sum();
    if skipped > 0 {
        logging::warn(
            Stage::Forecast,
            None,
            &format!("{} metric column(s) unavailable this run", skipped),
        );
    }

    let hotspots = hotspots::classify(&aggregates, &config.thresholds);
    match &hotspots {
        HotspotOutcome::Alerts(alerts) => {
            for alert in alerts {
                logging::warn(Stage::Alert, Some(alert.region_code), &alert.to_string());
            }
        }
        HotspotOutcome::AllClear => {
            logging::info(Stage::Alert, None, "no hotspots detected");
        }
    }

    let metric_summaries = MetricKind::ALL
        .into_iter()
        .map(|metric| MetricSummary {
            metric,
            total: aggregates.grand_total(metric),
        })
        .collect();

    DashboardReport {
        generated_at: Utc::now().to_rfc3339(),
        total_patients: census::TOTAL_PATIENTS,
        metric_summaries,
        aggregates,
        low_stock: stock::low_stock(&config.inventory),
        active_cases: census::under_treatment().into_iter().cloned().collect(),
        recommendations: census::RECOMMENDATIONS.to_vec(),
        forecasts,
        hotspots,
    }
}

// ---------------------------------------------------------------------------
// Text rendering
// ---------------------------------------------------------------------------

const DIVIDER: &str = "═══════════════════════════════════════════════════════════";

/// Render the report as the plain-text dashboard printed to stdout.
pub fn render_text(report: &DashboardReport) -> String {
    let mut out = String::new();
    let mut line = |s: &str| {
        out.push_str(s);
        out.push('\n');
    };

    line(DIVIDER);
    line("Clinical Operations Dashboard");
    line(&format!("Generated: {}", report.generated_at));
    line(DIVIDER);

    line("");
    line(&format!("Total Patients: {}", report.total_patients));

    line("");
    line("Metric Totals (all regions)");
    for summary in &report.metric_summaries {
        line(&format!("  {:<14} {:>8}", summary.metric.label(), summary.total));
    }

    line("");
    line("Stock Alerts");
    if report.low_stock.is_empty() {
        line("  No low stock alerts.");
    } else {
        for item in &report.low_stock {
            line(&format!(
                "  {:<10} stock {:>4} below threshold {:>4}",
                item.name, item.current_stock, item.threshold
            ));
        }
    }

    line("");
    line("Active Cases");
    for case in &report.active_cases {
        line(&format!("  #{:<4} {:<12} {}", case.patient_id, case.name, case.status));
    }

    line("");
    line("Treatment Recommendations");
    for rec in &report.recommendations {
        line(&format!("  #{:<4} {}", rec.patient_id, rec.recommendation));
    }

    line("");
    line("Forecast");
    for forecast in &report.forecasts {
        line(&format!("  {} ({})", forecast.region_code, forecast.model));
        let header: Vec<String> = MetricKind::ALL
            .iter()
            .map(|m| format!("{:>14}", m.label()))
            .collect();
        line(&format!("    {:>4}{}", "Day", header.join("")));
        for row in &forecast.rows {
            let cells: Vec<String> = MetricKind::ALL
                .iter()
                .map(|m| match row.value(*m) {
                    Some(value) => format!("{:>14.1}", value),
                    None => format!("{:>14}", "n/a"),
                })
                .collect();
            line(&format!("    {:>4}{}", row.day, cells.join("")));
        }
        for unavailable in &forecast.unavailable {
            line(&format!(
                "    ({} unavailable: {})",
                unavailable.metric, unavailable.reason
            ));
        }
    }

    line("");
    line("Hotspots");
    match &report.hotspots {
        HotspotOutcome::Alerts(alerts) => {
            for alert in alerts {
                line(&format!("  ⚠ {}", alert));
            }
        }
        HotspotOutcome::AllClear => line("  ✓ No hotspots detected."),
    }
    line(DIVIDER);

    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
