/// Alerting for the operations dashboard.
///
/// Submodules:
/// - `hotspots` — region/metric aggregate totals against configured
///   thresholds.
/// - `stock` — supply inventory rows below their reorder thresholds.

pub mod hotspots;
pub mod stock;
