//! Rule-based suitability oracle.
//!
//! Scores how well the available water and nutrients meet a crop's
//! requirements and scales the crop's base yield by that score. No model
//! is trained; the same inputs always give the same prediction.
//!
//! Each factor compares what is available with what the crop requires:
//!
//! | available / required | factor score |
//! |----------------------|--------------|
//! | up to 1.2            | `min(1, ratio)` (floored at 0) |
//! | up to 1.5            | 0.7          |
//! | beyond 1.5           | 0.5 for nutrients, 0.3 for water |
//!
//! `suitability = 0.4 * water + 0.6 * mean(N, P, K)`, and
//! `yield = base_yield * suitability`. Price is the crop's reference price.

use rotation_catalog::{AgronomyTable, CropAgronomy};
use rotation_types::{CropName, Nutrient};

use crate::oracle::{GrowingConditions, OracleError, Prediction, YieldOracle};

/// Up to this multiple of the requirement, supply scores proportionally.
const PROPORTIONAL_LIMIT: f64 = 1.2;

/// Up to this multiple of the requirement, oversupply scores [`MILD_EXCESS_SCORE`].
const MILD_EXCESS_LIMIT: f64 = 1.5;

const MILD_EXCESS_SCORE: f64 = 0.7;
const NUTRIENT_EXCESS_SCORE: f64 = 0.5;
const WATER_EXCESS_SCORE: f64 = 0.3;

const WATER_WEIGHT: f64 = 0.4;
const NUTRIENT_WEIGHT: f64 = 0.6;

/// Score one factor given availability, requirement, and the score used for
/// heavy oversupply. `required` is validated positive by the agronomy table.
fn factor_score(available: f64, required: f64, excess_score: f64) -> f64 {
    let ratio = available / required;
    if ratio <= PROPORTIONAL_LIMIT {
        ratio.clamp(0.0, 1.0)
    } else if ratio <= MILD_EXCESS_LIMIT {
        MILD_EXCESS_SCORE
    } else {
        excess_score
    }
}

/// Suitability of `conditions` for a crop, in `[0, 1]`.
pub fn suitability(agronomy: &CropAgronomy, conditions: &GrowingConditions) -> f64 {
    let water = factor_score(conditions.water, agronomy.ideal_water, WATER_EXCESS_SCORE);
    let nutrients: f64 = Nutrient::ALL
        .iter()
        .map(|&nutrient| {
            factor_score(
                conditions.nutrients.get(nutrient),
                agronomy.requirement.get(nutrient),
                NUTRIENT_EXCESS_SCORE,
            )
        })
        .sum::<f64>()
        / 3.0;
    WATER_WEIGHT * water + NUTRIENT_WEIGHT * nutrients
}

/// An oracle that derives yield from agronomic suitability.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuitabilityOracle {
    agronomy: AgronomyTable,
}

impl SuitabilityOracle {
    /// Create an oracle over the given agronomy table.
    pub const fn new(agronomy: AgronomyTable) -> Self {
        Self { agronomy }
    }
}

impl YieldOracle for SuitabilityOracle {
    fn predict(
        &self,
        crop: &CropName,
        conditions: &GrowingConditions,
    ) -> Result<Prediction, OracleError> {
        let agronomy = self
            .agronomy
            .get(crop.as_str())
            .ok_or_else(|| OracleError::UnknownCrop(crop.clone()))?;
        let score = suitability(agronomy, conditions);
        Ok(Prediction::new(
            agronomy.base_yield * score,
            agronomy.price_per_quintal,
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;
    use rotation_types::NutrientState;

    use super::*;

    fn maize() -> CropAgronomy {
        CropAgronomy {
            base_yield: 35.0,
            price_per_quintal: 2090.0,
            requirement: NutrientState::new(120.0, 60.0, 40.0),
            ideal_water: 650.0,
        }
    }

    fn oracle() -> SuitabilityOracle {
        let mut table = AgronomyTable::new();
        table.insert(CropName::from("Maize"), maize()).unwrap();
        SuitabilityOracle::new(table)
    }

    #[test]
    fn ideal_conditions_give_full_yield() {
        let c = GrowingConditions::new(NutrientState::new(120.0, 60.0, 40.0), 650.0);
        assert_relative_eq!(suitability(&maize(), &c), 1.0);
        let p = oracle().predict(&CropName::from("Maize"), &c).unwrap();
        assert_relative_eq!(p.yield_per_hectare, 35.0);
        assert_relative_eq!(p.price, 2090.0);
    }

    #[test]
    fn deficit_scales_proportionally() {
        // Half of every requirement.
        let c = GrowingConditions::new(NutrientState::new(60.0, 30.0, 20.0), 325.0);
        assert_relative_eq!(suitability(&maize(), &c), 0.5);
    }

    #[test]
    fn oversupply_is_penalised() {
        // Water at 2x (0.3), N at 1.4x (0.7), P at 3x (0.5), K exact (1.0).
        let c = GrowingConditions::new(NutrientState::new(168.0, 180.0, 40.0), 1300.0);
        let expected = 0.4 * 0.3 + 0.6 * (0.7 + 0.5 + 1.0) / 3.0;
        assert_relative_eq!(suitability(&maize(), &c), expected);
    }

    #[test]
    fn negative_nutrients_score_zero() {
        let c = GrowingConditions::new(NutrientState::new(-50.0, -5.0, -1.0), 650.0);
        assert_relative_eq!(suitability(&maize(), &c), 0.4);
    }

    #[test]
    fn more_nitrogen_helps_until_requirement() {
        let o = oracle();
        let crop = CropName::from("Maize");
        let low = o
            .predict(&crop, &GrowingConditions::new(NutrientState::new(20.0, 60.0, 40.0), 650.0))
            .unwrap();
        let high = o
            .predict(&crop, &GrowingConditions::new(NutrientState::new(100.0, 60.0, 40.0), 650.0))
            .unwrap();
        assert!(high.yield_per_hectare > low.yield_per_hectare);
    }

    #[test]
    fn unknown_crop_fails() {
        let c = GrowingConditions::new(NutrientState::new(1.0, 1.0, 1.0), 1.0);
        let result = oracle().predict(&CropName::from("Rice"), &c);
        assert!(matches!(result, Err(OracleError::UnknownCrop(_))));
    }
}
