//! The JSON report printed at the end of a run.
//!
//! Core values are kept exact; yields, prices, and revenues are rounded to
//! two decimals only here, when rendering.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use rotation_types::{RotationPlan, Season, YearEntry, rank_by_revenue};

/// Envelope around the plans of one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanReport {
    /// Unique, time-ordered identifier for this run.
    pub run_id: Uuid,
    /// When the report was produced.
    pub generated_at: DateTime<Utc>,
    /// Season whose catalog was planned against.
    pub season: Season,
    /// Region as given in the request.
    pub region: String,
    /// Water availability the region resolved to.
    pub water: f64,
    /// Seed of the random source.
    pub seed: u64,
    /// Plans in generation order, rounded for display.
    pub plans: Vec<RotationPlan>,
}

impl PlanReport {
    /// Wrap `plans` in a new report stamped with a fresh run id and the
    /// current time.
    pub fn new(season: Season, region: &str, water: f64, seed: u64, plans: &[RotationPlan]) -> Self {
        Self {
            run_id: Uuid::now_v7(),
            generated_at: Utc::now(),
            season,
            region: region.to_owned(),
            water: round2(water),
            seed,
            plans: plans.iter().map(rounded_plan).collect(),
        }
    }
}

/// Plan headers with their total revenue, highest first.
pub fn revenue_ranking(plans: &[RotationPlan]) -> Vec<(String, f64)> {
    rank_by_revenue(plans)
        .into_iter()
        .map(|plan| (plan.header.clone(), round2(plan.total_revenue())))
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn rounded_plan(plan: &RotationPlan) -> RotationPlan {
    RotationPlan {
        header: plan.header.clone(),
        entries: plan.entries.iter().map(rounded_entry).collect(),
    }
}

fn rounded_entry(entry: &YearEntry) -> YearEntry {
    YearEntry {
        predicted_yield: round2(entry.predicted_yield),
        price: round2(entry.price),
        revenue: round2(entry.revenue),
        ..entry.clone()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use approx::assert_relative_eq;
    use rotation_types::{CropName, NutrientState};

    use super::*;

    fn entry(crop: &str, predicted_yield: f64, price: f64) -> YearEntry {
        YearEntry {
            year: 1,
            crop: CropName::from(crop),
            nutrients_before: NutrientState::new(40.0, 20.0, 10.0),
            fertilizer_added: NutrientState::ZERO,
            predicted_yield,
            price,
            area: 2.0,
            revenue: predicted_yield * 2.0 * price,
        }
    }

    fn plans() -> Vec<RotationPlan> {
        vec![
            RotationPlan {
                header: String::from("Plan 1 (Start: Rice)"),
                entries: vec![entry("Rice", 31.234_567, 2183.0)],
            },
            RotationPlan {
                header: String::from("Plan 2 (Start: Tur)"),
                entries: vec![entry("Tur", 10.0, 7000.0)],
            },
        ]
    }

    #[test]
    fn report_rounds_display_values() {
        let report = PlanReport::new(Season::Kharif, "Atlantis", 7000.0 / 6.0, 42, &plans());
        assert_relative_eq!(report.water, 1166.67);
        let first = &report.plans[0].entries[0];
        assert_relative_eq!(first.predicted_yield, 31.23);
        assert_relative_eq!(first.revenue, 136_370.12);
        assert_eq!(report.plans[1].header, "Plan 2 (Start: Tur)");
    }

    #[test]
    fn report_serializes_envelope() {
        let report = PlanReport::new(Season::Rabi, "Hubli", 600.0, 7, &plans());
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["season"], "rabi");
        assert_eq!(value["region"], "Hubli");
        assert_eq!(value["seed"], 7);
        assert_eq!(value["plans"].as_array().unwrap().len(), 2);
        assert!(value["run_id"].is_string());
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn ranking_orders_by_total_revenue() {
        let ranking = revenue_ranking(&plans());
        assert_eq!(ranking[0].0, "Plan 2 (Start: Tur)");
        assert_relative_eq!(ranking[0].1, 140_000.0);
        assert_eq!(ranking[1].0, "Plan 1 (Start: Rice)");
    }
}
