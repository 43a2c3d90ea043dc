//! Startup helpers: config file resolution, request parsing, and oracle
//! construction.

use std::path::{Path, PathBuf};

use rotation_catalog::AgronomyTable;
use rotation_core::config::{OracleConfig, OracleKind, PlannerConfig};
use rotation_core::{Prediction, SuitabilityOracle, TableOracle, YieldOracle};
use rotation_types::{CropName, PlanRequest};

use crate::error::CliError;

/// Config file used when `ROTATION_CONFIG` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "rotation-config.yaml";

/// Resolve the config file path from `ROTATION_CONFIG` or the default.
pub fn config_path() -> PathBuf {
    std::env::var_os("ROTATION_CONFIG")
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
}

/// Load the planner configuration from `path`.
///
/// The file also carries the request, so a missing file is an error rather
/// than a fallback to defaults.
pub fn load_config(path: &Path) -> Result<PlannerConfig, CliError> {
    if !path.exists() {
        return Err(CliError::Request {
            message: format!(
                "config file {} not found; it must contain a `request` section",
                path.display()
            ),
        });
    }
    Ok(PlannerConfig::from_file(path)?)
}

/// Read the `request` section of the config file at `path`.
pub fn load_request(path: &Path) -> Result<PlanRequest, CliError> {
    let contents = std::fs::read_to_string(path).map_err(|e| CliError::Request {
        message: format!("failed to read {}: {e}", path.display()),
    })?;
    parse_request(&contents)
}

/// Parse the full YAML document and extract just the `request` section.
pub fn parse_request(yaml: &str) -> Result<PlanRequest, CliError> {
    let raw: serde_yml::Value = serde_yml::from_str(yaml).map_err(|e| CliError::Request {
        message: format!("failed to parse config YAML: {e}"),
    })?;
    let section = raw.get("request").ok_or_else(|| CliError::Request {
        message: String::from("config has no `request` section"),
    })?;
    serde_yml::from_value(section.clone()).map_err(|e| CliError::Request {
        message: format!("failed to parse request: {e}"),
    })
}

/// Build the oracle selected by `config`.
///
/// The suitability oracle takes ownership of the season's agronomy table;
/// the table oracle ignores it.
pub fn build_oracle(config: &OracleConfig, agronomy: AgronomyTable) -> Box<dyn YieldOracle> {
    match config.kind {
        OracleKind::Suitability => Box::new(SuitabilityOracle::new(agronomy)),
        OracleKind::Table => {
            let mut oracle = TableOracle::new();
            for (crop, row) in &config.table {
                oracle.insert(
                    CropName::from(crop.as_str()),
                    Prediction::new(row.yield_per_hectare, row.price),
                );
            }
            Box::new(oracle)
        }
    }
}
