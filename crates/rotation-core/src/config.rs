//! Configuration loading and typed config structures for the rotation
//! planner.
//!
//! The canonical configuration lives in `rotation-config.yaml`. This module
//! defines strongly-typed structs that mirror the YAML structure and a
//! loader that reads, overrides, and validates the file. Every field has a
//! default, so an empty document is a valid configuration.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value parsed but is outside its allowed range.
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level planner configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PlannerConfig {
    /// Rotation planning parameters.
    #[serde(default)]
    pub planner: PlanningConfig,

    /// Which yield oracle to use.
    #[serde(default)]
    pub oracle: OracleConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PlannerConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values:
    /// - `ROTATION_SEED` overrides `planner.seed`
    /// - `ROTATION_LOG_LEVEL` overrides `logging.level`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document means "all defaults".
        let mut config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.apply_env_overrides()?;
        config.planner.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("ROTATION_SEED") {
            self.planner.seed = val.trim().parse().map_err(|e| ConfigError::Invalid {
                field: "ROTATION_SEED",
                reason: format!("{e}"),
            })?;
        }
        if let Ok(val) = std::env::var("ROTATION_LOG_LEVEL") {
            self.logging.level = val;
        }
        Ok(())
    }
}

/// What the generator does when the start pool has no unused crop left for
/// a plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolExhaustion {
    /// Emit the plan with no entries and keep going.
    #[default]
    Truncate,
    /// Abort the run with an insufficient-candidates error.
    Fail,
}

/// Rotation planning parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlanningConfig {
    /// Number of simulated years per plan.
    #[serde(default = "default_horizon")]
    pub horizon: u32,

    /// Width of the top-ranked window the next crop is drawn from.
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Number of top-ranked crops considered as plan starts.
    #[serde(default = "default_start_pool_size")]
    pub start_pool_size: usize,

    /// Random seed for reproducible plans.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Behavior when the start pool runs dry.
    #[serde(default)]
    pub on_pool_exhausted: PoolExhaustion,
}

impl PlanningConfig {
    /// Check that every parameter is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the horizon, window width, or
    /// start pool size is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let zero = |field: &'static str| ConfigError::Invalid {
            field,
            reason: String::from("must be at least 1"),
        };
        if self.horizon == 0 {
            return Err(zero("planner.horizon"));
        }
        if self.top_k == 0 {
            return Err(zero("planner.top_k"));
        }
        if self.start_pool_size == 0 {
            return Err(zero("planner.start_pool_size"));
        }
        Ok(())
    }
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            horizon: default_horizon(),
            top_k: default_top_k(),
            start_pool_size: default_start_pool_size(),
            seed: default_seed(),
            on_pool_exhausted: PoolExhaustion::default(),
        }
    }
}

/// The kind of yield oracle to build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OracleKind {
    /// Rule-based suitability scoring from the season's agronomy table.
    #[default]
    Suitability,
    /// Fixed yield and price per crop from `oracle.table`.
    Table,
}

/// One row of a fixed oracle table.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TableRow {
    /// Yield in quintals per hectare.
    #[serde(rename = "yield")]
    pub yield_per_hectare: f64,
    /// Price per quintal.
    pub price: f64,
}

/// Yield oracle selection.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OracleConfig {
    /// Which oracle to build.
    #[serde(default)]
    pub kind: OracleKind,

    /// Crop rows for [`OracleKind::Table`]; ignored otherwise.
    #[serde(default)]
    pub table: BTreeMap<String, TableRow>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

const fn default_horizon() -> u32 {
    3
}

const fn default_top_k() -> usize {
    5
}

const fn default_start_pool_size() -> usize {
    9
}

const fn default_seed() -> u64 {
    42
}

fn default_log_level() -> String {
    "info".to_owned()
}
