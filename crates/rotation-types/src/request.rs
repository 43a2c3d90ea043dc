//! The planning request a caller submits.
//!
//! Bounds mirror the input checks of the public prediction endpoints: each
//! nutrient in `[0, 500]` kg/ha and a strictly positive plot area. Unknown
//! regions are accepted here because the region lookup falls back to the
//! mean rainfall of the known regions.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::{Validate, ValidationError};

use crate::enums::Season;
use crate::nutrients::NutrientState;

/// Default number of plans generated per request.
pub const DEFAULT_NUM_PLANS: usize = 3;

/// Upper bound accepted for each starting nutrient level (kg/ha).
pub const MAX_NUTRIENT_LEVEL: f64 = 500.0;

/// Inputs for one planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PlanRequest {
    /// Starting soil nitrogen (kg/ha).
    #[validate(range(min = 0.0, max = MAX_NUTRIENT_LEVEL), custom(function = "finite"))]
    pub n: f64,
    /// Starting soil phosphorus as `P2O5` (kg/ha).
    #[validate(range(min = 0.0, max = MAX_NUTRIENT_LEVEL), custom(function = "finite"))]
    pub p: f64,
    /// Starting soil potassium as `K2O` (kg/ha).
    #[validate(range(min = 0.0, max = MAX_NUTRIENT_LEVEL), custom(function = "finite"))]
    pub k: f64,
    /// Region name used to look up water availability.
    #[validate(length(min = 1))]
    pub region: String,
    /// Plot area in hectares.
    #[validate(range(exclusive_min = 0.0), custom(function = "finite"))]
    pub area: f64,
    /// Cropping season, which selects the crop catalog.
    #[serde(default)]
    pub season: Season,
    /// Number of diversified plans to generate.
    #[serde(default = "default_num_plans")]
    #[validate(range(min = 1))]
    pub num_plans: usize,
}

impl PlanRequest {
    /// Create a request for the default season and plan count.
    pub fn new(n: f64, p: f64, k: f64, region: impl Into<String>, area: f64) -> Self {
        Self {
            n,
            p,
            k,
            region: region.into(),
            area,
            season: Season::default(),
            num_plans: DEFAULT_NUM_PLANS,
        }
    }

    /// Return a copy of this request for a different season.
    #[must_use]
    pub const fn with_season(mut self, season: Season) -> Self {
        self.season = season;
        self
    }

    /// Return a copy of this request generating `num_plans` plans.
    #[must_use]
    pub const fn with_num_plans(mut self, num_plans: usize) -> Self {
        self.num_plans = num_plans;
        self
    }

    /// The starting soil state.
    pub const fn initial_nutrients(&self) -> NutrientState {
        NutrientState::new(self.n, self.p, self.k)
    }
}

const fn default_num_plans() -> usize {
    DEFAULT_NUM_PLANS
}

/// Reject `NaN` and infinities, which range checks alone let through.
fn finite(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("finite"))
    }
}
