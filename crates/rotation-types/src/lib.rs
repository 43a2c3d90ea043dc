//! Shared type definitions for the crop rotation planner.
//!
//! This crate is the single source of truth for the data model used across
//! the workspace. Output types flow downstream to `TypeScript` via `ts-rs`
//! for the web front-end that renders rotation plans.
//!
//! # Modules
//!
//! - [`crop`] -- [`CropName`] wrapper and per-crop [`CropProfile`] records
//! - [`enums`] -- Enumeration types (cropping seasons, nutrients)
//! - [`nutrients`] -- [`NutrientState`], the `{N, P, K}` soil record
//! - [`plan`] -- Simulated [`YearEntry`] rows and [`RotationPlan`] trajectories
//! - [`request`] -- The validated [`PlanRequest`] a caller submits

pub mod crop;
pub mod enums;
pub mod nutrients;
pub mod plan;
pub mod request;

// Re-export all public types at crate root for convenience.
pub use crop::{CropName, CropProfile};
pub use enums::{Nutrient, Season};
pub use nutrients::NutrientState;
pub use plan::{RotationPlan, YearEntry, rank_by_revenue};
pub use request::PlanRequest;
