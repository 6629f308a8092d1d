//! Risk/capital configuration and engine settings, with INI-backed builders.

use crate::domain::error::ScanError;
use crate::ports::config_port::ConfigPort;

pub const DEFAULT_CAPITAL: f64 = 100_000.0;
pub const DEFAULT_RISK_PCT: f64 = 1.0;
pub const DEFAULT_TARGET_PCT: f64 = 12.0;

/// Capital and risk appetite for one analysis call. Not persisted.
#[derive(Debug, Clone)]
pub struct RiskConfig {
    /// Total capital available, in the series' currency.
    pub capital: f64,
    /// Fraction of capital risked per trade, in percent.
    pub risk_pct: f64,
    /// Desired profit, in percent.
    pub target_pct: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            capital: DEFAULT_CAPITAL,
            risk_pct: DEFAULT_RISK_PCT,
            target_pct: DEFAULT_TARGET_PCT,
        }
    }
}

/// The engine constants that drifted across the three near-duplicate copies of
/// the original implementation, pinned down as explicit configuration.
#[derive(Debug, Clone)]
pub struct AnalysisSettings {
    /// Minimum series length accepted by `analyze`. The source used values in
    /// the 10-15 range across call sites; standardized to 15.
    pub min_bars: usize,
    /// Series length below which the long-SMA snapshot is not treated as a
    /// trend signal (the trend vote is skipped, not cast).
    pub trend_window: usize,
    /// Floor on per-share risk when sizing a position, guarding division by
    /// zero when entry and stop coincide.
    pub per_share_risk_floor: f64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            min_bars: 15,
            trend_window: 50,
            per_share_risk_floor: 1e-3,
        }
    }
}

fn require_positive(section: &str, key: &str, value: f64) -> Result<f64, ScanError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ScanError::ConfigInvalid {
            section: section.into(),
            key: key.into(),
            reason: format!("must be a positive number, got {}", value),
        });
    }
    Ok(value)
}

/// Build a `RiskConfig` from the `[risk]` section, defaulting absent keys.
pub fn build_risk_config(config: &dyn ConfigPort) -> Result<RiskConfig, ScanError> {
    let capital = require_positive(
        "risk",
        "capital",
        config.get_double("risk", "capital", DEFAULT_CAPITAL),
    )?;
    let risk_pct = require_positive(
        "risk",
        "risk_pct",
        config.get_double("risk", "risk_pct", DEFAULT_RISK_PCT),
    )?;
    let target_pct = require_positive(
        "risk",
        "target_pct",
        config.get_double("risk", "target_pct", DEFAULT_TARGET_PCT),
    )?;

    Ok(RiskConfig {
        capital,
        risk_pct,
        target_pct,
    })
}

/// Validate the `[scan]` section used by the scan/list-symbols commands.
pub fn validate_scan_config(config: &dyn ConfigPort) -> Result<(), ScanError> {
    let data_dir = config
        .get_string("scan", "data_dir")
        .ok_or_else(|| ScanError::ConfigMissing {
            section: "scan".into(),
            key: "data_dir".into(),
        })?;
    if data_dir.trim().is_empty() {
        return Err(ScanError::ConfigInvalid {
            section: "scan".into(),
            key: "data_dir".into(),
            reason: "must not be empty".into(),
        });
    }

    let top = config.get_int("scan", "top", 10);
    if top <= 0 {
        return Err(ScanError::ConfigInvalid {
            section: "scan".into(),
            key: "top".into(),
            reason: format!("must be a positive integer, got {}", top),
        });
    }

    build_risk_config(config).map(|_| ())
}
