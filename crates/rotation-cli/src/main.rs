//! Command-line runner for the crop rotation planner.
//!
//! Loads configuration and a planning request from one YAML file, runs the
//! planner against the built-in season catalog, and prints a JSON report
//! to stdout. Logs go to stderr.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `ROTATION_CONFIG` or `rotation-config.yaml`
//!    (the file is required, since it carries the request)
//! 2. Initialize structured logging (tracing)
//! 3. Read the `request` section
//! 4. Build the season's crop catalog, the region table, and the oracle
//! 5. Run the planner with the configured seed
//! 6. Log the revenue ranking and print the report

mod error;
mod report;
mod setup;

use rotation_catalog::{karnataka_regions, season_data};
use rotation_core::RotationPlanner;
use rotation_core::config::LoggingConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;
use crate::report::{PlanReport, revenue_ranking};

/// Application entry point for the planner binary.
///
/// # Errors
///
/// Returns an error if configuration, the request, or the planning run
/// fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let config_path = setup::config_path();
    let config = setup::load_config(&config_path)?;

    // 2. Initialize structured logging.
    init_logging(&config.logging);
    info!("rotation-planner starting");
    info!(
        path = %config_path.display(),
        horizon = config.planner.horizon,
        top_k = config.planner.top_k,
        start_pool_size = config.planner.start_pool_size,
        seed = config.planner.seed,
        oracle = ?config.oracle.kind,
        "Configuration loaded"
    );

    // 3. Read the request.
    let request = setup::load_request(&config_path)?;

    // 4. Build catalog, regions, and oracle.
    let data = season_data(request.season).map_err(CliError::from)?;
    let regions = karnataka_regions().map_err(CliError::from)?;
    info!(
        season = %request.season,
        crops = data.catalog.len(),
        regions = regions.len(),
        "Crop catalog loaded"
    );
    if !regions.is_known(&request.region) {
        info!(
            region = %request.region,
            fallback_mm = regions.mean(),
            "Unknown region, using mean rainfall"
        );
    }
    let oracle = setup::build_oracle(&config.oracle, data.agronomy);

    // 5. Run the planner.
    let planner = RotationPlanner::new(
        &data.catalog,
        &regions,
        oracle.as_ref(),
        config.planner.clone(),
    );
    let plans = planner
        .generate_seeded(&request)
        .map_err(CliError::from)?;

    // 6. Report.
    for (rank, (header, revenue)) in revenue_ranking(&plans).into_iter().enumerate() {
        info!(rank = rank.saturating_add(1), revenue, "{header}");
    }
    let report = PlanReport::new(
        request.season,
        &request.region,
        regions.water_for(&request.region),
        config.planner.seed,
        &plans,
    );
    let json = serde_json::to_string_pretty(&report).map_err(CliError::from)?;
    println!("{json}");

    info!(run_id = %report.run_id, plans = plans.len(), "rotation-planner finished");
    Ok(())
}

/// Install the global tracing subscriber. `RUST_LOG` takes precedence over
/// the configured level.
fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
