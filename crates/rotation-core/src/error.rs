//! Error types for the `rotation-core` crate.
//!
//! [`PlannerError`] is returned by every fallible planning operation. Any
//! error aborts the whole run: there is no retry and no partial result.
//! Running out of candidate crops mid-plan is not an error; the plan simply
//! ends early.

use rotation_catalog::CatalogError;

use crate::oracle::OracleError;

/// Errors that can occur during a planning run.
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    /// The request failed validation before any prediction was made.
    #[error("invalid planning request: {source}")]
    InvalidInput {
        /// The underlying validation errors.
        #[from]
        source: validator::ValidationErrors,
    },

    /// A crop profile lookup failed.
    #[error("catalog error: {source}")]
    Catalog {
        /// The underlying catalog error.
        #[from]
        source: CatalogError,
    },

    /// The yield oracle failed.
    #[error("oracle error: {source}")]
    Oracle {
        /// The underlying oracle error.
        #[from]
        source: OracleError,
    },

    /// The start pool had no unused crop left to seed a plan.
    #[error("no unused start crop for plan {plan} (start pool size {pool_size})")]
    InsufficientCandidates {
        /// 1-based number of the plan that could not be seeded.
        plan: usize,
        /// Number of crops in the start pool.
        pool_size: usize,
    },
}
