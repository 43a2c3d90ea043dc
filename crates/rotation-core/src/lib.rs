//! The rotation planner: ranking, nutrient correction, sequencing, and
//! diversified plan generation.
//!
//! A planning run flows top-down: [`RotationPlanner`] ranks every known
//! crop to pick diversified starts, then a [`Sequencer`] simulates each
//! plan year by year, correcting negative nutrients before every
//! prediction and drawing the next crop from the top of a fresh ranking.
//! Yield and price come from a [`YieldOracle`], which the planner treats
//! as a black box.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `rotation-config.yaml` into
//!   strongly-typed structs.
//! - [`error`] -- [`PlannerError`], returned by every fallible planning step.
//! - [`generator`] -- [`RotationPlanner`], the entry point for a run.
//! - [`guard`] -- The nutrient correction guard run before each prediction.
//! - [`oracle`] -- [`YieldOracle`] trait and the fixed [`TableOracle`].
//! - [`ranker`] -- Candidate ranking by predicted yield.
//! - [`sequencer`] -- Year-by-year plan simulation and the shared
//!   [`UsedCropSet`].
//! - [`suitability`] -- [`SuitabilityOracle`], a rule-based agronomic oracle.
//!
//! [`RotationPlanner`]: generator::RotationPlanner
//! [`Sequencer`]: sequencer::Sequencer
//! [`UsedCropSet`]: sequencer::UsedCropSet
//! [`YieldOracle`]: oracle::YieldOracle
//! [`TableOracle`]: oracle::TableOracle
//! [`PlannerError`]: error::PlannerError
//! [`SuitabilityOracle`]: suitability::SuitabilityOracle

pub mod config;
pub mod error;
pub mod generator;
pub mod guard;
pub mod oracle;
pub mod ranker;
pub mod sequencer;
pub mod suitability;

pub use config::{PlannerConfig, PoolExhaustion};
pub use error::PlannerError;
pub use generator::RotationPlanner;
pub use oracle::{GrowingConditions, OracleError, Prediction, TableOracle, YieldOracle};
pub use sequencer::{Sequencer, UsedCropSet};
pub use suitability::SuitabilityOracle;
