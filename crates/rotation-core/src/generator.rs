//! Diversified plan generation.
//!
//! [`RotationPlanner`] is the entry point for a planning run. It validates
//! the request and resolves the region's water availability. It then ranks
//! every known crop at the starting soil state to form a start pool, and
//! runs one [`Sequencer`] per requested plan. A single [`UsedCropSet`] and
//! a single random source are threaded through all sequences in
//! generation order, so plan `i + 1` never starts before plan `i` finishes.
//!
//! Each plan starts with the highest-ranked pool crop that no earlier plan
//! has used. When the pool has none left, [`PoolExhaustion`] decides
//! whether the run emits an empty plan or fails.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};
use validator::Validate;

use rotation_catalog::{CropCatalog, RegionRainfall};
use rotation_types::{CropName, PlanRequest, RotationPlan};

use crate::config::{PlanningConfig, PoolExhaustion};
use crate::error::PlannerError;
use crate::oracle::{GrowingConditions, YieldOracle};
use crate::ranker::{RankedCrop, rank};
use crate::sequencer::{PlotConditions, Sequencer, UsedCropSet};

/// Generates diversified rotation plans for planning requests.
///
/// Borrows the crop catalog, region table, and oracle; holds no state
/// between runs.
pub struct RotationPlanner<'a> {
    catalog: &'a CropCatalog,
    regions: &'a RegionRainfall,
    oracle: &'a dyn YieldOracle,
    settings: PlanningConfig,
}

impl<'a> RotationPlanner<'a> {
    /// Create a planner over the given catalog, regions, and oracle.
    pub const fn new(
        catalog: &'a CropCatalog,
        regions: &'a RegionRainfall,
        oracle: &'a dyn YieldOracle,
        settings: PlanningConfig,
    ) -> Self {
        Self {
            catalog,
            regions,
            oracle,
            settings,
        }
    }

    /// Generate `request.num_plans` plans, drawing randomness from `rng`.
    ///
    /// Plans are returned in generation order, not sorted by revenue.
    ///
    /// # Errors
    ///
    /// - [`PlannerError::InvalidInput`] if the request fails validation
    /// - [`PlannerError::Oracle`] or [`PlannerError::Catalog`] if any crop
    ///   lookup fails; the run is abandoned with no partial result
    /// - [`PlannerError::InsufficientCandidates`] if the start pool runs dry
    ///   under [`PoolExhaustion::Fail`]
    pub fn generate_plans<R: Rng + ?Sized>(
        &self,
        request: &PlanRequest,
        rng: &mut R,
    ) -> Result<Vec<RotationPlan>, PlannerError> {
        request.validate()?;

        let water = self.regions.water_for(&request.region);
        let initial = request.initial_nutrients();
        let pool = self.start_pool(GrowingConditions::new(initial, water))?;

        info!(
            region = %request.region,
            season = %request.season,
            water,
            area = request.area,
            num_plans = request.num_plans,
            pool_size = pool.len(),
            "Generating rotation plans"
        );

        let sequencer = Sequencer::new(
            self.catalog,
            self.oracle,
            self.settings.horizon,
            self.settings.top_k,
            PlotConditions {
                water,
                area: request.area,
            },
        );
        let mut used = UsedCropSet::new();
        let mut plans = Vec::with_capacity(request.num_plans);

        for plan_number in 1..=request.num_plans {
            let Some(start) = next_start(&pool, &used) else {
                if self.settings.on_pool_exhausted == PoolExhaustion::Fail {
                    return Err(PlannerError::InsufficientCandidates {
                        plan: plan_number,
                        pool_size: pool.len(),
                    });
                }
                warn!(
                    plan = plan_number,
                    pool_size = pool.len(),
                    "Start pool exhausted, emitting empty plan"
                );
                plans.push(RotationPlan {
                    header: RotationPlan::header_for(plan_number, None),
                    entries: Vec::new(),
                });
                continue;
            };

            let header = RotationPlan::header_for(plan_number, Some(&start));
            let entries = sequencer.run(start, initial, &mut used, rng)?;
            let plan = RotationPlan { header, entries };
            info!(
                plan = plan_number,
                years = plan.len(),
                revenue = plan.total_revenue(),
                "{}",
                plan.header
            );
            plans.push(plan);
        }

        Ok(plans)
    }

    /// Generate plans with a random source seeded from `planner.seed`.
    ///
    /// Repeated calls with the same request return identical plans.
    ///
    /// # Errors
    ///
    /// Same as [`generate_plans`](Self::generate_plans).
    pub fn generate_seeded(&self, request: &PlanRequest) -> Result<Vec<RotationPlan>, PlannerError> {
        let mut rng = StdRng::seed_from_u64(self.settings.seed);
        self.generate_plans(request, &mut rng)
    }

    /// Rank every known crop at the starting conditions and keep the top
    /// `start_pool_size`.
    fn start_pool(&self, conditions: GrowingConditions) -> Result<Vec<RankedCrop>, PlannerError> {
        let all: Vec<CropName> = self.catalog.crop_names().cloned().collect();
        let mut pool = rank(&all, &conditions, self.oracle)?;
        pool.truncate(self.settings.start_pool_size);
        Ok(pool)
    }
}

/// The highest-ranked pool crop not yet used in this run.
fn next_start(pool: &[RankedCrop], used: &UsedCropSet) -> Option<CropName> {
    pool.iter()
        .map(|ranked| &ranked.crop)
        .find(|crop| !used.contains(crop.as_str()))
        .cloned()
}
