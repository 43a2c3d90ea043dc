//! Year-by-year simulation of a single rotation plan.
//!
//! A sequence moves through `Year 1 -> Year 2 -> ... -> Year H ->
//! Terminated`. Each year:
//!
//! 1. Correct negative nutrients with fertilizer ([`correct_nutrients`]).
//! 2. Predict yield and price for the current crop at the corrected levels.
//! 3. Record a [`YearEntry`] with `revenue = yield * area * price`.
//! 4. Deplete the soil by the crop's profile (levels may go negative).
//! 5. Mark the crop as used.
//! 6. Unless this was the final year, rank every unused crop at the
//!    depleted (uncorrected) soil state and draw the next crop uniformly
//!    from the top `top_k`.
//!
//! The sequence terminates early when no unused crop remains. The
//! [`UsedCropSet`] is shared across every plan of a run, which keeps crops
//! from repeating both within a plan and across plans.

use std::collections::BTreeSet;

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

use rotation_catalog::CropCatalog;
use rotation_types::{CropName, NutrientState, YearEntry};

use crate::error::PlannerError;
use crate::guard::correct_nutrients;
use crate::oracle::{GrowingConditions, YieldOracle, predict_clamped};
use crate::ranker::rank;

// ---------------------------------------------------------------------------
// UsedCropSet
// ---------------------------------------------------------------------------

/// Crops already chosen, as a start or a rotation step, in the current run.
///
/// Lives for exactly one planning run and is threaded by reference through
/// every sequence of that run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedCropSet {
    crops: BTreeSet<CropName>,
}

impl UsedCropSet {
    /// Create an empty set.
    pub const fn new() -> Self {
        Self {
            crops: BTreeSet::new(),
        }
    }

    /// Mark a crop as used. Returns `false` if it was already marked.
    pub fn insert(&mut self, crop: CropName) -> bool {
        self.crops.insert(crop)
    }

    /// Check whether a crop has been used.
    pub fn contains(&self, crop: &str) -> bool {
        self.crops.contains(crop)
    }

    /// Return the number of used crops.
    pub fn len(&self) -> usize {
        self.crops.len()
    }

    /// Check whether no crop has been used yet.
    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Sequencer
// ---------------------------------------------------------------------------

/// Fixed plot conditions for a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotConditions {
    /// Water availability (annual rainfall, mm).
    pub water: f64,
    /// Plot area in hectares.
    pub area: f64,
}

/// Simulates rotation plans against a crop catalog and yield oracle.
pub struct Sequencer<'a> {
    catalog: &'a CropCatalog,
    oracle: &'a dyn YieldOracle,
    horizon: u32,
    top_k: usize,
    plot: PlotConditions,
}

impl<'a> Sequencer<'a> {
    /// Create a sequencer simulating `horizon` years per plan and drawing
    /// each next crop from the `top_k` best-ranked candidates.
    ///
    /// A `top_k` of zero is treated as one.
    pub fn new(
        catalog: &'a CropCatalog,
        oracle: &'a dyn YieldOracle,
        horizon: u32,
        top_k: usize,
        plot: PlotConditions,
    ) -> Self {
        Self {
            catalog,
            oracle,
            horizon,
            top_k: top_k.max(1),
            plot,
        }
    }

    /// Simulate one plan starting with `start` on soil `initial`.
    ///
    /// Returns at most `horizon` entries; fewer when the candidate pool runs
    /// dry. Every crop grown is added to `used`.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::Oracle`] or [`PlannerError::Catalog`] if a
    /// prediction or profile lookup fails. Nothing is retried.
    pub fn run<R: Rng + ?Sized>(
        &self,
        start: CropName,
        initial: NutrientState,
        used: &mut UsedCropSet,
        rng: &mut R,
    ) -> Result<Vec<YearEntry>, PlannerError> {
        let mut entries = Vec::new();
        let mut soil = initial;
        let mut crop = start;

        for year in 1..=self.horizon {
            let correction = correct_nutrients(soil);
            if correction.fired() {
                debug!(
                    year,
                    crop = %crop,
                    fertilizer = ?correction.fertilizer,
                    "Negative nutrients corrected"
                );
            }

            let conditions = GrowingConditions::new(correction.nutrients, self.plot.water);
            let prediction = predict_clamped(self.oracle, &crop, &conditions)?;
            let revenue = prediction.yield_per_hectare * self.plot.area * prediction.price;

            entries.push(YearEntry {
                year,
                crop: crop.clone(),
                nutrients_before: correction.nutrients,
                fertilizer_added: correction.fertilizer,
                predicted_yield: prediction.yield_per_hectare,
                price: prediction.price,
                area: self.plot.area,
                revenue,
            });

            let depletion = self.catalog.depletion(crop.as_str())?;
            soil = correction.nutrients.depleted_by(&depletion);
            used.insert(crop);

            if year == self.horizon {
                break;
            }

            match self.next_crop(soil, used, rng)? {
                Some(next) => {
                    debug!(year, next = %next, "Next crop selected");
                    crop = next;
                }
                None => {
                    debug!(year, "Candidate pool exhausted, ending plan early");
                    break;
                }
            }
        }

        Ok(entries)
    }

    /// Rank unused crops at `soil` and draw one from the top of the ranking.
    fn next_crop<R: Rng + ?Sized>(
        &self,
        soil: NutrientState,
        used: &UsedCropSet,
        rng: &mut R,
    ) -> Result<Option<CropName>, PlannerError> {
        let candidates: Vec<CropName> = self
            .catalog
            .crop_names()
            .filter(|crop| !used.contains(crop.as_str()))
            .cloned()
            .collect();
        if candidates.is_empty() {
            return Ok(None);
        }

        let conditions = GrowingConditions::new(soil, self.plot.water);
        let mut ranked = rank(&candidates, &conditions, self.oracle)?;
        ranked.truncate(self.top_k);
        Ok(ranked.choose(rng).map(|choice| choice.crop.clone()))
    }
}
