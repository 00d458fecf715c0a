//! Clinic operations analytics service.
//!
//! A batch pipeline that renders an operations dashboard for a set of
//! monitored service regions: synthetic daily observations → per-region
//! aggregates and per-metric forecasts → hotspot alerts, alongside the
//! inventory and patient-census tables. One run produces one
//! [`report::DashboardReport`]; nothing persists between runs.
//!
//! Dataflow is strictly one way and single-threaded:
//!
//! ```text
//! synth ──► analysis ──► alert::hotspots ──┐
//!   │                                      ├──► report
//!   └─────► forecast ─────────────────────┘
//! ```

pub mod alert;
pub mod analysis;
pub mod census;
pub mod config;
pub mod forecast;
pub mod logging;
pub mod model;
pub mod regions;
pub mod report;
pub mod synth;
