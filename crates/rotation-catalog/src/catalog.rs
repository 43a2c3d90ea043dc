//! The crop nutrient profile store.
//!
//! Maps each known crop to its per-cycle nutrient depletion. The set of
//! crops in the catalog is also the universe the planner draws candidates
//! from, so iteration order matters: crops are kept sorted by name, which
//! gives ranking a stable input order for equal predicted yields.
//!
//! Depletion values may be negative. A negative rate means the crop returns
//! that nutrient to the soil (legumes fixing nitrogen, for example).

use std::collections::BTreeMap;

use tracing::debug;

use rotation_types::{CropName, CropProfile, NutrientState};

use crate::error::CatalogError;

/// Registry of crop nutrient profiles keyed by crop name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CropCatalog {
    /// Profiles keyed by crop name.
    profiles: BTreeMap<CropName, CropProfile>,
}

impl CropCatalog {
    /// Create an empty catalog.
    pub const fn new() -> Self {
        Self {
            profiles: BTreeMap::new(),
        }
    }

    /// Build a catalog from a list of profiles.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateCrop`] if two profiles share a name,
    /// or [`CatalogError::InvalidCrop`] if any depletion rate is not finite.
    pub fn from_profiles(
        profiles: impl IntoIterator<Item = CropProfile>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for profile in profiles {
            catalog.insert(profile)?;
        }
        Ok(catalog)
    }

    /// Add a profile to the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateCrop`] if the crop is already
    /// present, or [`CatalogError::InvalidCrop`] if any depletion rate is
    /// not finite.
    pub fn insert(&mut self, profile: CropProfile) -> Result<(), CatalogError> {
        let d = profile.depletion;
        if !(d.n.is_finite() && d.p.is_finite() && d.k.is_finite()) {
            return Err(CatalogError::InvalidCrop {
                crop: profile.name,
                reason: String::from("depletion rates must be finite"),
            });
        }
        if self.profiles.contains_key(&profile.name) {
            return Err(CatalogError::DuplicateCrop(profile.name));
        }
        debug!(crop = %profile.name, n = d.n, p = d.p, k = d.k, "Crop profile registered");
        self.profiles.insert(profile.name.clone(), profile);
        Ok(())
    }

    /// Per-cycle depletion for a crop.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownCrop`] if the crop has no profile.
    pub fn depletion(&self, crop: &str) -> Result<NutrientState, CatalogError> {
        self.profiles
            .get(crop)
            .map(|profile| profile.depletion)
            .ok_or_else(|| CatalogError::UnknownCrop(CropName::from(crop)))
    }

    /// Check whether a crop has a profile.
    pub fn contains(&self, crop: &str) -> bool {
        self.profiles.contains_key(crop)
    }

    /// Iterate over all known crop names in sorted order.
    pub fn crop_names(&self) -> impl Iterator<Item = &CropName> {
        self.profiles.keys()
    }

    /// Return the number of crops in the catalog.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Check whether the catalog has no crops.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
