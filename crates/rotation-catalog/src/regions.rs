//! Region to water availability lookup.
//!
//! Water availability is the region's typical annual rainfall in mm. The
//! lookup is total: a region that is not in the table resolves to the mean
//! rainfall of every known region, so an unrecognised name degrades to an
//! average-conditions plan instead of failing the request.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::CatalogError;

/// Annual rainfall (mm) keyed by region name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionRainfall {
    regions: BTreeMap<String, f64>,
}

impl RegionRainfall {
    /// Create an empty table.
    pub const fn new() -> Self {
        Self {
            regions: BTreeMap::new(),
        }
    }

    /// Build a table from `(region, rainfall_mm)` pairs.
    ///
    /// A repeated region keeps the last value.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidRainfall`] if any value is negative or
    /// not finite.
    pub fn from_pairs<'a>(
        pairs: impl IntoIterator<Item = (&'a str, f64)>,
    ) -> Result<Self, CatalogError> {
        let mut table = Self::new();
        for (region, rainfall_mm) in pairs {
            table.insert(region, rainfall_mm)?;
        }
        Ok(table)
    }

    /// Set the rainfall for a region.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidRainfall`] if the value is negative
    /// or not finite.
    pub fn insert(&mut self, region: &str, rainfall_mm: f64) -> Result<(), CatalogError> {
        if !rainfall_mm.is_finite() || rainfall_mm < 0.0 {
            return Err(CatalogError::InvalidRainfall {
                region: region.to_owned(),
                rainfall_mm,
            });
        }
        self.regions.insert(region.to_owned(), rainfall_mm);
        Ok(())
    }

    /// Water available in `region`, falling back to [`mean`](Self::mean)
    /// for unknown regions.
    pub fn water_for(&self, region: &str) -> f64 {
        if let Some(&rainfall) = self.regions.get(region) {
            rainfall
        } else {
            let fallback = self.mean();
            debug!(region, fallback, "Unknown region, using mean rainfall");
            fallback
        }
    }

    /// Mean rainfall across all known regions, or `0.0` for an empty table.
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self) -> f64 {
        if self.regions.is_empty() {
            return 0.0;
        }
        let total: f64 = self.regions.values().sum();
        // Region counts are tiny; the cast is exact.
        total / self.regions.len() as f64
    }

    /// Check whether a region has its own entry.
    pub fn is_known(&self, region: &str) -> bool {
        self.regions.contains_key(region)
    }

    /// Return the number of known regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Check whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
