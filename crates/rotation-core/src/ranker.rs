//! Candidate crop ranking.
//!
//! Orders a candidate set by predicted yield, highest first. The sort is
//! stable: candidates with equal yield keep their input order. The oracle
//! is called exactly once per candidate.

use rotation_types::CropName;

use crate::oracle::{GrowingConditions, OracleError, YieldOracle, predict_clamped};

/// A candidate crop with the yield it was ranked by.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCrop {
    /// The candidate.
    pub crop: CropName,
    /// Predicted yield under the ranking conditions (never negative).
    pub predicted_yield: f64,
}

/// Rank `candidates` by predicted yield under `conditions`, descending.
///
/// An empty candidate list yields an empty ranking.
///
/// # Errors
///
/// Returns the first [`OracleError`] encountered.
pub fn rank(
    candidates: &[CropName],
    conditions: &GrowingConditions,
    oracle: &dyn YieldOracle,
) -> Result<Vec<RankedCrop>, OracleError> {
    let mut ranked = candidates
        .iter()
        .map(|crop| {
            predict_clamped(oracle, crop, conditions).map(|prediction| RankedCrop {
                crop: crop.clone(),
                predicted_yield: prediction.yield_per_hectare,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    ranked.sort_by(|a, b| b.predicted_yield.total_cmp(&a.predicted_yield));
    Ok(ranked)
}
