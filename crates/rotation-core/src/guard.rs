//! Nutrient correction guard.
//!
//! Runs once per simulated year, before the oracle is queried. Each
//! nutrient is checked independently: a negative level is topped up with
//! fertilizer back to [`NUTRIENT_FLOOR`], and the amount applied is
//! recorded as `|level| + NUTRIENT_FLOOR`. Levels at or above zero pass
//! through untouched with no fertilizer recorded.

use rotation_types::{Nutrient, NutrientState};

/// Minimal-viability level a negative nutrient is reset to.
pub const NUTRIENT_FLOOR: f64 = 1.0;

/// Result of running the guard over one year's soil state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correction {
    /// Nutrient levels after correction; never negative.
    pub nutrients: NutrientState,
    /// Fertilizer applied per nutrient; zero where no correction fired.
    pub fertilizer: NutrientState,
}

impl Correction {
    /// Whether any nutrient needed fertilizer.
    pub fn fired(&self) -> bool {
        Nutrient::ALL
            .iter()
            .any(|&nutrient| self.fertilizer.get(nutrient) > 0.0)
    }
}

/// Apply the correction guard to a raw soil state.
pub fn correct_nutrients(raw: NutrientState) -> Correction {
    let mut nutrients = raw;
    let mut fertilizer = NutrientState::ZERO;
    for nutrient in Nutrient::ALL {
        let level = raw.get(nutrient);
        if level < 0.0 {
            fertilizer.set(nutrient, level.abs() + NUTRIENT_FLOOR);
            nutrients.set(nutrient, NUTRIENT_FLOOR);
        }
    }
    Correction {
        nutrients,
        fertilizer,
    }
}
