//! Enumeration types for the rotation planner.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Cropping seasons
// ---------------------------------------------------------------------------

/// An Indian cropping season. Each season has its own crop catalog and
/// yield model; the planning algorithm is the same for both.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Season {
    /// Monsoon season, sown June-July and harvested September-October.
    #[default]
    Kharif,
    /// Winter season, sown October-November and harvested March-April.
    Rabi,
}

impl core::fmt::Display for Season {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Kharif => f.write_str("kharif"),
            Self::Rabi => f.write_str("rabi"),
        }
    }
}

// ---------------------------------------------------------------------------
// Nutrients
// ---------------------------------------------------------------------------

/// One of the three primary soil macronutrients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Nutrient {
    /// Nitrogen.
    N,
    /// Phosphorus.
    P,
    /// Potassium.
    K,
}

impl Nutrient {
    /// All nutrients in canonical `N, P, K` order.
    pub const ALL: [Self; 3] = [Self::N, Self::P, Self::K];
}
