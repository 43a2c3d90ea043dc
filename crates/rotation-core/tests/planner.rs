//! End-to-end planning runs against stub and built-in oracles.

#![allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::float_cmp)]

use std::cell::RefCell;
use std::collections::BTreeSet;

use approx::assert_relative_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

use rotation_catalog::{CropCatalog, RegionRainfall, karnataka_regions, season_data};
use rotation_core::config::PlanningConfig;
use rotation_core::{
    GrowingConditions, OracleError, PlannerError, PoolExhaustion, Prediction, RotationPlanner,
    SuitabilityOracle, TableOracle, YieldOracle,
};
use rotation_types::{
    CropName, CropProfile, Nutrient, NutrientState, PlanRequest, RotationPlan, Season,
};

fn stub_catalog() -> CropCatalog {
    CropCatalog::from_profiles([
        CropProfile::new("Rice", 30.0, 15.0, 12.0),
        CropProfile::new("Maize", 25.0, 10.0, 8.0),
        CropProfile::new("Cotton", 20.0, 8.0, 10.0),
        CropProfile::new("Ragi", 10.0, 5.0, 5.0),
        CropProfile::new("Jowar", 15.0, 6.0, 6.0),
        CropProfile::new("Groundnut", -5.0, 10.0, 8.0),
        CropProfile::new("Tur", -10.0, 5.0, 5.0),
        CropProfile::new("Sunflower", 18.0, 12.0, 9.0),
        CropProfile::new("Bajra", 12.0, 4.0, 4.0),
        CropProfile::new("Soybean", -15.0, 8.0, 6.0),
    ])
    .unwrap()
}

fn stub_oracle() -> TableOracle {
    TableOracle::from_rows([
        ("Rice", 45.0, 2183.0),
        ("Maize", 35.0, 2090.0),
        ("Cotton", 15.0, 6620.0),
        ("Ragi", 25.0, 3846.0),
        ("Jowar", 20.0, 3180.0),
        ("Groundnut", 18.0, 6377.0),
        ("Tur", 10.0, 7000.0),
        ("Sunflower", 12.0, 6760.0),
        ("Bajra", 22.0, 2500.0),
        ("Soybean", 16.0, 4600.0),
    ])
}

fn bangalore_request() -> PlanRequest {
    PlanRequest::new(40.0, 20.0, 10.0, "Bangalore", 2.0)
}

fn all_crops(plans: &[RotationPlan]) -> Vec<&str> {
    plans
        .iter()
        .flat_map(RotationPlan::crops)
        .map(CropName::as_str)
        .collect()
}

/// Replays each plan's soil trajectory and checks the correction guard.
fn assert_guard_holds(plans: &[RotationPlan], catalog: &CropCatalog, initial: NutrientState) {
    for plan in plans {
        let mut soil = initial;
        for entry in &plan.entries {
            assert!(entry.nutrients_before.is_non_negative(), "{}", plan.header);
            for nutrient in Nutrient::ALL {
                let raw = soil.get(nutrient);
                let fed = entry.nutrients_before.get(nutrient);
                let added = entry.fertilizer_added.get(nutrient);
                if raw < 0.0 {
                    assert_relative_eq!(added, raw.abs() + 1.0);
                    assert_relative_eq!(fed, 1.0);
                } else {
                    assert_eq!(added, 0.0);
                    assert_relative_eq!(fed, raw);
                }
            }
            let depletion = catalog.depletion(entry.crop.as_str()).unwrap();
            soil = entry.nutrients_before.depleted_by(&depletion);
        }
    }
}

#[test]
fn bangalore_scenario() {
    let catalog = stub_catalog();
    let regions = karnataka_regions().unwrap();
    let oracle = stub_oracle();
    let planner = RotationPlanner::new(&catalog, &regions, &oracle, PlanningConfig::default());

    let plans = planner.generate_seeded(&bangalore_request()).unwrap();

    assert_eq!(plans.len(), 3);
    for (i, plan) in plans.iter().enumerate() {
        assert!(plan.len() <= 3);
        let start = plan.start_crop().unwrap();
        assert_eq!(plan.header, format!("Plan {} (Start: {start})", i + 1));
        for entry in &plan.entries {
            assert_relative_eq!(entry.revenue, entry.predicted_yield * entry.area * entry.price);
            assert_relative_eq!(entry.area, 2.0);
        }
    }

    let crops = all_crops(&plans);
    let unique: BTreeSet<&str> = crops.iter().copied().collect();
    assert_eq!(unique.len(), crops.len(), "crop reused: {crops:?}");
}

#[test]
fn first_plan_starts_with_best_initial_crop() {
    let catalog = stub_catalog();
    let regions = karnataka_regions().unwrap();
    let oracle = stub_oracle();
    let planner = RotationPlanner::new(&catalog, &regions, &oracle, PlanningConfig::default());

    let plans = planner.generate_seeded(&bangalore_request()).unwrap();
    assert_eq!(plans[0].header, "Plan 1 (Start: Rice)");
    assert_eq!(plans[0].entries[0].year, 1);
    assert_eq!(
        plans[0].entries[0].nutrients_before,
        NutrientState::new(40.0, 20.0, 10.0)
    );
}

#[test]
fn fixed_seed_is_idempotent() {
    let catalog = stub_catalog();
    let regions = karnataka_regions().unwrap();
    let oracle = stub_oracle();
    let planner = RotationPlanner::new(&catalog, &regions, &oracle, PlanningConfig::default());
    let request = bangalore_request();

    let first = planner.generate_seeded(&request).unwrap();
    let second = planner.generate_seeded(&request).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );

    let mut rng_a = StdRng::seed_from_u64(2024);
    let mut rng_b = StdRng::seed_from_u64(2024);
    assert_eq!(
        planner.generate_plans(&request, &mut rng_a).unwrap(),
        planner.generate_plans(&request, &mut rng_b).unwrap()
    );
}

#[test]
fn guard_and_no_reuse_hold_across_seeds() {
    let catalog = stub_catalog();
    let regions = karnataka_regions().unwrap();
    let oracle = stub_oracle();
    let planner = RotationPlanner::new(&catalog, &regions, &oracle, PlanningConfig::default());
    let request = bangalore_request();

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let plans = planner.generate_plans(&request, &mut rng).unwrap();

        let crops = all_crops(&plans);
        let unique: BTreeSet<&str> = crops.iter().copied().collect();
        assert_eq!(unique.len(), crops.len(), "seed {seed} reused a crop");

        // Ten crops cover three full plans of three years.
        assert!(plans.iter().all(|p| p.len() == 3), "seed {seed}");

        assert_guard_holds(&plans, &catalog, request.initial_nutrients());
    }
}

#[test]
fn horizon_bounds_every_plan() {
    let catalog = stub_catalog();
    let regions = karnataka_regions().unwrap();
    let oracle = stub_oracle();
    let settings = PlanningConfig {
        horizon: 2,
        ..PlanningConfig::default()
    };
    let planner = RotationPlanner::new(&catalog, &regions, &oracle, settings);

    let plans = planner
        .generate_seeded(&bangalore_request().with_num_plans(4))
        .unwrap();
    assert_eq!(plans.len(), 4);
    for plan in &plans {
        assert_eq!(plan.len(), 2);
        let years: Vec<u32> = plan.entries.iter().map(|e| e.year).collect();
        assert_eq!(years, vec![1, 2]);
    }
}

/// Records the water level of every prediction.
struct WaterRecorder {
    inner: TableOracle,
    seen: RefCell<Vec<f64>>,
}

impl YieldOracle for WaterRecorder {
    fn predict(
        &self,
        crop: &CropName,
        conditions: &GrowingConditions,
    ) -> Result<Prediction, OracleError> {
        self.seen.borrow_mut().push(conditions.water);
        self.inner.predict(crop, conditions)
    }
}

#[test]
fn unknown_region_uses_mean_rainfall() {
    let catalog = stub_catalog();
    let regions = karnataka_regions().unwrap();
    let recorder = WaterRecorder {
        inner: stub_oracle(),
        seen: RefCell::new(Vec::new()),
    };
    let planner = RotationPlanner::new(&catalog, &regions, &recorder, PlanningConfig::default());

    let request = PlanRequest::new(40.0, 20.0, 10.0, "Atlantis", 1.0);
    let plans = planner.generate_seeded(&request).unwrap();
    assert_eq!(plans.len(), 3);

    let seen = recorder.seen.borrow();
    assert!(!seen.is_empty());
    for &water in seen.iter() {
        assert_relative_eq!(water, 7000.0 / 6.0);
    }
}

#[test]
fn two_crops_three_plans_ends_early_without_error() {
    let catalog = CropCatalog::from_profiles([
        CropProfile::new("Rice", 30.0, 15.0, 12.0),
        CropProfile::new("Ragi", 10.0, 5.0, 5.0),
    ])
    .unwrap();
    let regions = karnataka_regions().unwrap();
    let oracle = stub_oracle();
    let planner = RotationPlanner::new(&catalog, &regions, &oracle, PlanningConfig::default());

    let plans = planner.generate_seeded(&bangalore_request()).unwrap();
    assert_eq!(plans.len(), 3);
    assert!(plans.iter().all(|p| p.len() < 3));
    assert_eq!(all_crops(&plans), vec!["Rice", "Ragi"]);
    assert_eq!(plans[0].header, "Plan 1 (Start: Rice)");
    assert_eq!(plans[1].header, "Plan 2 (Start: none)");
    assert_eq!(plans[2].header, "Plan 3 (Start: none)");
    assert!(plans[1].is_empty() && plans[2].is_empty());
}

#[test]
fn fail_policy_reports_insufficient_candidates() {
    let catalog = CropCatalog::from_profiles([
        CropProfile::new("Rice", 30.0, 15.0, 12.0),
        CropProfile::new("Ragi", 10.0, 5.0, 5.0),
    ])
    .unwrap();
    let regions = karnataka_regions().unwrap();
    let oracle = stub_oracle();
    let settings = PlanningConfig {
        on_pool_exhausted: PoolExhaustion::Fail,
        ..PlanningConfig::default()
    };
    let planner = RotationPlanner::new(&catalog, &regions, &oracle, settings);

    let result = planner.generate_seeded(&bangalore_request());
    assert!(matches!(
        result,
        Err(PlannerError::InsufficientCandidates {
            plan: 2,
            pool_size: 2
        })
    ));
}

#[test]
fn invalid_request_is_rejected_before_prediction() {
    let catalog = stub_catalog();
    let regions = karnataka_regions().unwrap();
    let recorder = WaterRecorder {
        inner: stub_oracle(),
        seen: RefCell::new(Vec::new()),
    };
    let planner = RotationPlanner::new(&catalog, &regions, &recorder, PlanningConfig::default());

    let request = PlanRequest::new(40.0, 20.0, 10.0, "Bangalore", -2.0);
    let result = planner.generate_seeded(&request);
    assert!(matches!(result, Err(PlannerError::InvalidInput { .. })));
    assert!(recorder.seen.borrow().is_empty());
}

#[test]
fn nan_nutrient_is_rejected_before_prediction() {
    let catalog = stub_catalog();
    let regions = karnataka_regions().unwrap();
    let recorder = WaterRecorder {
        inner: stub_oracle(),
        seen: RefCell::new(Vec::new()),
    };
    let planner = RotationPlanner::new(&catalog, &regions, &recorder, PlanningConfig::default());

    let request = PlanRequest::new(f64::NAN, 20.0, 10.0, "Bangalore", 2.0);
    let result = planner.generate_seeded(&request);
    assert!(matches!(result, Err(PlannerError::InvalidInput { .. })));
    assert!(recorder.seen.borrow().is_empty());
}

#[test]
fn crop_unknown_to_oracle_aborts_the_run() {
    let mut catalog = stub_catalog();
    catalog
        .insert(CropProfile::new("Horsegram", 5.0, 5.0, 5.0))
        .unwrap();
    let regions = karnataka_regions().unwrap();
    let oracle = stub_oracle();
    let planner = RotationPlanner::new(&catalog, &regions, &oracle, PlanningConfig::default());

    let result = planner.generate_seeded(&bangalore_request());
    assert!(matches!(
        result,
        Err(PlannerError::Oracle {
            source: OracleError::UnknownCrop(ref crop)
        }) if crop.as_str() == "Horsegram"
    ));
}

#[test]
fn empty_region_table_still_plans() {
    let catalog = stub_catalog();
    let regions = RegionRainfall::new();
    let oracle = stub_oracle();
    let planner = RotationPlanner::new(&catalog, &regions, &oracle, PlanningConfig::default());

    let plans = planner.generate_seeded(&bangalore_request()).unwrap();
    assert_eq!(plans.len(), 3);
}

#[test]
fn builtin_seasons_plan_with_suitability_oracle() {
    let regions = karnataka_regions().unwrap();
    for season in [Season::Kharif, Season::Rabi] {
        let data = season_data(season).unwrap();
        let oracle = SuitabilityOracle::new(data.agronomy.clone());
        let planner =
            RotationPlanner::new(&data.catalog, &regions, &oracle, PlanningConfig::default());
        let request = PlanRequest::new(90.0, 40.0, 40.0, "Mysore", 1.5).with_season(season);

        let plans = planner.generate_seeded(&request).unwrap();
        assert_eq!(plans.len(), 3);

        let crops = all_crops(&plans);
        let unique: BTreeSet<&str> = crops.iter().copied().collect();
        assert_eq!(unique.len(), crops.len(), "{season} reused a crop");
        assert!(plans.iter().all(|p| p.len() == 3), "{season}");

        for entry in plans.iter().flat_map(|p| &p.entries) {
            assert!(entry.predicted_yield >= 0.0);
            assert!(entry.price > 0.0);
            assert_relative_eq!(entry.revenue, entry.predicted_yield * entry.area * entry.price);
        }
        assert_guard_holds(&plans, &data.catalog, request.initial_nutrients());
    }
}
