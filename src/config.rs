/// Runtime configuration for the analytics pipeline.
///
/// Configuration is loaded from a TOML file (path in the `CLINOPS_CONFIG`
/// environment variable); a missing file is not an error — the built-in
/// defaults mirror the original dashboard's hardcoded tables. Thresholds
/// live here as an explicit structure rather than inline literals so tests
/// can run the classifier against alternate values.

use serde::Deserialize;
use std::path::Path;

use crate::alert::stock::{self, StockItem};
use crate::model::MetricKind;

// ---------------------------------------------------------------------------
// Config sections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub forecast: ForecastConfig,
    pub thresholds: Thresholds,
    /// Supply inventory rows checked by the low-stock alert.
    pub inventory: Vec<StockItem>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            simulation: SimulationConfig::default(),
            forecast: ForecastConfig::default(),
            thresholds: Thresholds::default(),
            inventory: stock::default_inventory(),
        }
    }
}

/// Synthetic data generation parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Length of the historical window, in days.
    pub history_days: u32,
    /// RNG seed; a fixed seed reproduces the exact same dataset.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            history_days: 30,
            seed: 42,
        }
    }
}

/// Forecasting parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Number of future days to project.
    pub horizon_days: u32,
    /// Which model to fit per metric.
    pub model: ModelChoice,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        ForecastConfig {
            horizon_days: 7,
            model: ModelChoice::Linear,
        }
    }
}

/// Selectable forecast models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelChoice {
    /// Ordinary least-squares trend line (default).
    Linear,
    /// Repeat the last detected cycle; falls back to last-value naive.
    SeasonalNaive,
}

/// Per-metric hotspot thresholds for aggregate totals.
///
/// Defaults are calibrated to the 30-day default window: slightly above
/// the expected sum of each metric's generation range, so a hotspot means
/// a genuinely elevated region rather than ordinary variance.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub treated: u64,
    pub vaccinated: u64,
    pub tested: u64,
    pub high_bp_cases: u64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            treated: 1_850,
            vaccinated: 920,
            tested: 1_700,
            high_bp_cases: 150,
        }
    }
}

impl Thresholds {
    /// The threshold for `metric`. Total with `MetricKind` closed, so every
    /// metric always has a threshold.
    pub fn for_metric(&self, metric: MetricKind) -> u64 {
        match metric {
            MetricKind::Treated => self.treated,
            MetricKind::Vaccinated => self.vaccinated,
            MetricKind::Tested => self.tested,
            MetricKind::HighBpCases => self.high_bp_cases,
        }
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Environment variable naming the config file path.
pub const CONFIG_PATH_ENV: &str = "CLINOPS_CONFIG";

/// Errors from loading or validating configuration. Fatal at startup.
#[derive(Debug)]
pub enum ConfigError {
    Io { path: String, source: std::io::Error },
    Parse { path: String, message: String },
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "failed to read config file '{}': {}", path, source)
            }
            ConfigError::Parse { path, message } => {
                write!(f, "failed to parse config file '{}': {}", path, message)
            }
            ConfigError::Invalid(msg) => write!(f, "invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Load configuration from a TOML file and validate it.
    pub fn from_file(path: &Path) -> Result<Config, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = toml::from_str(&text).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the path in `CLINOPS_CONFIG`, or fall back to defaults
    /// when the variable is unset. A set-but-unreadable path is an error:
    /// silently ignoring a requested config file hides typos.
    pub fn load() -> Result<Config, ConfigError> {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Config::from_file(Path::new(&path)),
            Err(_) => Ok(Config::default()),
        }
    }

    /// Sanity checks on loaded values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.simulation.history_days == 0 {
            return Err(ConfigError::Invalid(
                "simulation.history_days must be at least 1".to_string(),
            ));
        }
        if self.forecast.horizon_days == 0 {
            return Err(ConfigError::Invalid(
                "forecast.horizon_days must be at least 1".to_string(),
            ));
        }
        for item in &self.inventory {
            if item.name.is_empty() {
                return Err(ConfigError::Invalid(
                    "inventory items must have a non-empty name".to_string(),
                ));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
