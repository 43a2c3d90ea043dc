//! Yield/price oracle trait and table implementation.
//!
//! The planner never trains or inspects a model. It asks a [`YieldOracle`]
//! for the expected yield and price of a crop under given soil and water
//! conditions, and treats the answer as opaque. Implementations must be
//! deterministic for fixed model weights: the same crop and conditions
//! always produce the same prediction.
//!
//! [`TableOracle`] answers from a fixed crop table and ignores conditions.
//! It backs tests and the `table` oracle kind. The agronomic
//! [`SuitabilityOracle`](crate::suitability::SuitabilityOracle) lives in
//! its own module.

use std::collections::BTreeMap;

use rotation_types::{CropName, NutrientState};

/// Errors that can occur while querying an oracle.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    /// The oracle has no model for the requested crop.
    #[error("oracle has no model for crop {0}")]
    UnknownCrop(CropName),
}

/// Soil and water conditions a prediction is made under.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowingConditions {
    /// Soil nutrient levels.
    pub nutrients: NutrientState,
    /// Water availability (annual rainfall, mm).
    pub water: f64,
}

impl GrowingConditions {
    /// Bundle nutrients and water into a conditions record.
    pub const fn new(nutrients: NutrientState, water: f64) -> Self {
        Self { nutrients, water }
    }
}

/// Predicted yield and price for one crop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Yield in quintals per hectare.
    pub yield_per_hectare: f64,
    /// Price per quintal.
    pub price: f64,
}

impl Prediction {
    /// Create a prediction.
    pub const fn new(yield_per_hectare: f64, price: f64) -> Self {
        Self {
            yield_per_hectare,
            price,
        }
    }

    /// Clamp yield and price to zero or above.
    ///
    /// `NaN` also becomes zero, since `f64::max` returns the non-`NaN`
    /// operand.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            yield_per_hectare: self.yield_per_hectare.max(0.0),
            price: self.price.max(0.0),
        }
    }
}

/// A source of yield and price predictions.
pub trait YieldOracle {
    /// Predict yield and price for `crop` under `conditions`.
    ///
    /// Implementations may return negative values; callers go through
    /// [`predict_clamped`].
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::UnknownCrop`] if the oracle has no model for
    /// the crop.
    fn predict(
        &self,
        crop: &CropName,
        conditions: &GrowingConditions,
    ) -> Result<Prediction, OracleError>;
}

/// Query the oracle and clamp its answer to non-negative values.
///
/// # Errors
///
/// Propagates any [`OracleError`] from the oracle unchanged.
pub fn predict_clamped(
    oracle: &dyn YieldOracle,
    crop: &CropName,
    conditions: &GrowingConditions,
) -> Result<Prediction, OracleError> {
    oracle.predict(crop, conditions).map(Prediction::clamped)
}

/// An oracle answering from a fixed crop table, ignoring conditions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableOracle {
    rows: BTreeMap<CropName, Prediction>,
}

impl TableOracle {
    /// Create an empty table oracle.
    pub const fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
        }
    }

    /// Build a table from `(crop, yield, price)` rows.
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = (&'a str, f64, f64)>) -> Self {
        let rows = rows
            .into_iter()
            .map(|(crop, yield_per_hectare, price)| {
                (CropName::from(crop), Prediction::new(yield_per_hectare, price))
            })
            .collect();
        Self { rows }
    }

    /// Set the prediction returned for `crop`.
    pub fn insert(&mut self, crop: CropName, prediction: Prediction) {
        self.rows.insert(crop, prediction);
    }

    /// Return the number of crops in the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl YieldOracle for TableOracle {
    fn predict(
        &self,
        crop: &CropName,
        _conditions: &GrowingConditions,
    ) -> Result<Prediction, OracleError> {
        self.rows
            .get(crop)
            .copied()
            .ok_or_else(|| OracleError::UnknownCrop(crop.clone()))
    }
}
