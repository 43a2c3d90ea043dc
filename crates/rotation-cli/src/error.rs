//! Error types for the planner binary.
//!
//! [`CliError`] is the top-level error type that wraps every failure mode
//! between startup and printing the report.

/// Top-level error for the planner binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: rotation_core::config::ConfigError,
    },

    /// Built-in crop or region data failed to load.
    #[error("catalog error: {source}")]
    Catalog {
        /// The underlying catalog error.
        #[from]
        source: rotation_catalog::CatalogError,
    },

    /// The planning run failed.
    #[error("planner error: {source}")]
    Planner {
        /// The underlying planner error.
        #[from]
        source: rotation_core::PlannerError,
    },

    /// The `request` section is missing or malformed.
    #[error("request error: {message}")]
    Request {
        /// Description of the request failure.
        message: String,
    },

    /// The report could not be serialized.
    #[error("report error: {source}")]
    Report {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}
