//! Soil nutrient levels.
//!
//! [`NutrientState`] is an explicit `{N, P, K}` record. It serializes as a
//! three-element `[N, P, K]` array, the shape consumers of rotation plans
//! expect, but inside Rust every access goes through a named field or a
//! [`Nutrient`] selector so field order can never be confused.

use serde::{Deserialize, Serialize};

use crate::enums::Nutrient;

/// Real-valued soil nutrient levels in kg/ha equivalent.
///
/// Values may go negative while a plan is being simulated (depletion can
/// overshoot); the nutrient correction guard restores them before any
/// prediction is made.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct NutrientState {
    /// Nitrogen.
    pub n: f64,
    /// Phosphorus (as `P2O5`).
    pub p: f64,
    /// Potassium (as `K2O`).
    pub k: f64,
}

impl NutrientState {
    /// All three nutrients at zero.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a nutrient state from N, P, and K levels.
    pub const fn new(n: f64, p: f64, k: f64) -> Self {
        Self { n, p, k }
    }

    /// Read the level of a single nutrient.
    pub const fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::N => self.n,
            Nutrient::P => self.p,
            Nutrient::K => self.k,
        }
    }

    /// Overwrite the level of a single nutrient.
    pub const fn set(&mut self, nutrient: Nutrient, value: f64) {
        match nutrient {
            Nutrient::N => self.n = value,
            Nutrient::P => self.p = value,
            Nutrient::K => self.k = value,
        }
    }

    /// Return the state left after removing `depletion` from each nutrient.
    ///
    /// No clamping is applied: the result may be negative.
    pub fn depleted_by(&self, depletion: &Self) -> Self {
        Self::new(
            self.n - depletion.n,
            self.p - depletion.p,
            self.k - depletion.k,
        )
    }

    /// Whether every nutrient is zero or above.
    pub fn is_non_negative(&self) -> bool {
        Nutrient::ALL.iter().all(|&nutrient| self.get(nutrient) >= 0.0)
    }
}

impl From<[f64; 3]> for NutrientState {
    fn from([n, p, k]: [f64; 3]) -> Self {
        Self::new(n, p, k)
    }
}

impl From<NutrientState> for [f64; 3] {
    fn from(state: NutrientState) -> Self {
        [state.n, state.p, state.k]
    }
}
