//! Crop identity and per-crop nutrient depletion profiles.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::nutrients::NutrientState;

/// Name of a crop, as known to the profile store and the yield oracle.
///
/// Crop names are compared exactly (case-sensitive). Ordering is lexical,
/// which gives catalogs a stable iteration order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export, export_to = "bindings/")]
pub struct CropName(String);

impl CropName {
    /// Borrow the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CropName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CropName {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for CropName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for CropName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CropName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Static per-crop record of nutrient consumption per growing cycle.
///
/// Sourced from the crop profile store and immutable for the duration of
/// a planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CropProfile {
    /// The crop this profile describes.
    pub name: CropName,
    /// Nutrients removed from the soil by one growing cycle (kg/ha).
    #[ts(as = "[f64; 3]")]
    pub depletion: NutrientState,
}

impl CropProfile {
    /// Build a profile from individual N, P, and K depletion rates.
    pub fn new(name: impl Into<CropName>, n: f64, p: f64, k: f64) -> Self {
        Self {
            name: name.into(),
            depletion: NutrientState::new(n, p, k),
        }
    }
}
