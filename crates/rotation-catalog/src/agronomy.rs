//! Per-crop growing requirements and market data.
//!
//! These records feed the built-in suitability oracle, which estimates how
//! well a crop will do under given soil and water conditions without a
//! trained model.

use std::collections::BTreeMap;

use rotation_types::{CropName, NutrientState};

use crate::error::CatalogError;

/// Agronomic reference values for one crop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropAgronomy {
    /// Yield under ideal conditions, in quintals per hectare.
    pub base_yield: f64,
    /// Market price per quintal.
    pub price_per_quintal: f64,
    /// Soil nutrient levels the crop needs for a full yield (kg/ha).
    pub requirement: NutrientState,
    /// Annual water the crop needs for a full yield (mm).
    pub ideal_water: f64,
}

impl CropAgronomy {
    fn validate(&self, crop: &CropName) -> Result<(), CatalogError> {
        let r = self.requirement;
        let positive = [self.ideal_water, r.n, r.p, r.k]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0);
        let non_negative = [self.base_yield, self.price_per_quintal]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0);
        if positive && non_negative {
            Ok(())
        } else {
            Err(CatalogError::InvalidCrop {
                crop: crop.clone(),
                reason: String::from(
                    "requirements and water must be positive, yield and price non-negative",
                ),
            })
        }
    }
}

/// Agronomy records keyed by crop name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgronomyTable {
    crops: BTreeMap<CropName, CropAgronomy>,
}

impl AgronomyTable {
    /// Create an empty table.
    pub const fn new() -> Self {
        Self {
            crops: BTreeMap::new(),
        }
    }

    /// Add a record.
    ///
    /// Requirements are divisors in the suitability score, so they must be
    /// strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateCrop`] if the crop already has a
    /// record, or [`CatalogError::InvalidCrop`] if a value is out of range.
    pub fn insert(&mut self, crop: CropName, record: CropAgronomy) -> Result<(), CatalogError> {
        record.validate(&crop)?;
        if self.crops.contains_key(&crop) {
            return Err(CatalogError::DuplicateCrop(crop));
        }
        self.crops.insert(crop, record);
        Ok(())
    }

    /// Look up the record for a crop.
    pub fn get(&self, crop: &str) -> Option<&CropAgronomy> {
        self.crops.get(crop)
    }

    /// Return the number of crops in the table.
    pub fn len(&self) -> usize {
        self.crops.len()
    }

    /// Check whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }
}
