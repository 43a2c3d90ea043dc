//! Rotation plan output types.
//!
//! A [`RotationPlan`] is one simulated multi-year trajectory: a header
//! naming the plan and its starting crop, followed by one [`YearEntry`] per
//! simulated year. Both are built once by the planner and never mutated.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::crop::CropName;
use crate::nutrients::NutrientState;

// ---------------------------------------------------------------------------
// YearEntry
// ---------------------------------------------------------------------------

/// One simulated year of a rotation plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct YearEntry {
    /// 1-based year index within the plan.
    pub year: u32,
    /// The crop grown this year.
    pub crop: CropName,
    /// Soil nutrients the oracle saw this year, after fertilizer correction.
    #[ts(as = "[f64; 3]")]
    pub nutrients_before: NutrientState,
    /// Fertilizer applied to lift negative nutrients back to the floor.
    #[ts(as = "[f64; 3]")]
    pub fertilizer_added: NutrientState,
    /// Predicted yield in quintals per hectare (never negative).
    pub predicted_yield: f64,
    /// Predicted price per quintal (never negative).
    pub price: f64,
    /// Plot area in hectares.
    pub area: f64,
    /// `predicted_yield * area * price`.
    pub revenue: f64,
}

// ---------------------------------------------------------------------------
// RotationPlan
// ---------------------------------------------------------------------------

/// A full simulated trajectory for one starting crop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RotationPlan {
    /// Human-readable header, e.g. `Plan 1 (Start: Rice)`.
    pub header: String,
    /// Simulated years in order. May be shorter than the horizon when the
    /// candidate pool runs dry.
    pub entries: Vec<YearEntry>,
}

impl RotationPlan {
    /// Format the header for the plan at 1-based position `plan_number`.
    ///
    /// Plans that could not be seeded with a start crop are headed
    /// `Plan {n} (Start: none)`.
    pub fn header_for(plan_number: usize, start: Option<&CropName>) -> String {
        match start {
            Some(crop) => format!("Plan {plan_number} (Start: {crop})"),
            None => format!("Plan {plan_number} (Start: none)"),
        }
    }

    /// The crop grown in the first year, if the plan has any entries.
    pub fn start_crop(&self) -> Option<&CropName> {
        self.entries.first().map(|entry| &entry.crop)
    }

    /// Iterate over the crops grown, in year order.
    pub fn crops(&self) -> impl Iterator<Item = &CropName> {
        self.entries.iter().map(|entry| &entry.crop)
    }

    /// Sum of revenue across all simulated years.
    pub fn total_revenue(&self) -> f64 {
        self.entries.iter().map(|entry| entry.revenue).sum()
    }

    /// Total fertilizer applied across all years.
    pub fn total_fertilizer(&self) -> NutrientState {
        self.entries
            .iter()
            .fold(NutrientState::ZERO, |acc, entry| {
                NutrientState::new(
                    acc.n + entry.fertilizer_added.n,
                    acc.p + entry.fertilizer_added.p,
                    acc.k + entry.fertilizer_added.k,
                )
            })
    }

    /// Number of simulated years.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the plan has no simulated years.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Order plans by total revenue, highest first.
///
/// Plans with equal revenue keep their generation order.
pub fn rank_by_revenue(plans: &[RotationPlan]) -> Vec<&RotationPlan> {
    let mut ranked: Vec<&RotationPlan> = plans.iter().collect();
    ranked.sort_by(|a, b| b.total_revenue().total_cmp(&a.total_revenue()));
    ranked
}
