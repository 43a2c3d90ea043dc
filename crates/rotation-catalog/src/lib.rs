//! Crop profiles, agronomy, and region data for the crop rotation planner.
//!
//! The planner treats these as external collaborators: a store mapping each
//! crop to its per-cycle nutrient depletion, and a region lookup that turns
//! a region name into annual water availability.
//!
//! # Modules
//!
//! - [`agronomy`] -- Per-crop growing requirements, base yield, and price
//!   used by the built-in suitability oracle.
//! - [`builtin`] -- Reference Kharif and Rabi crop tables and the Karnataka
//!   region rainfall map.
//! - [`catalog`] -- [`CropCatalog`], the crop nutrient profile store.
//! - [`error`] -- Error types for catalog lookups and construction.
//! - [`regions`] -- [`RegionRainfall`], the region to water lookup with a
//!   mean-of-known-regions fallback.

pub mod agronomy;
pub mod builtin;
pub mod catalog;
pub mod error;
pub mod regions;

// Re-export primary types at crate root.
pub use agronomy::{AgronomyTable, CropAgronomy};
pub use builtin::{SeasonData, karnataka_regions, season_data};
pub use catalog::CropCatalog;
pub use error::CatalogError;
pub use regions::RegionRainfall;
