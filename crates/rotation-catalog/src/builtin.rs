//! Built-in reference data: Kharif and Rabi crop tables and Karnataka
//! regional rainfall.
//!
//! Depletion figures are per growing cycle in kg/ha of N, `P2O5`, and
//! `K2O`. Pulses and oilseed legumes carry a negative nitrogen figure for
//! the nitrogen they fix. Prices are INR per quintal; yields are quintals
//! per hectare.

use rotation_types::{CropName, CropProfile, NutrientState, Season};

use crate::agronomy::{AgronomyTable, CropAgronomy};
use crate::catalog::CropCatalog;
use crate::error::CatalogError;
use crate::regions::RegionRainfall;

/// One row of a built-in crop table.
struct CropRow {
    name: &'static str,
    depletion: [f64; 3],
    base_yield: f64,
    price_per_quintal: f64,
    requirement: [f64; 3],
    ideal_water: f64,
}

/// Helper to build a [`CropRow`].
const fn row(
    name: &'static str,
    depletion: [f64; 3],
    base_yield: f64,
    price_per_quintal: f64,
    requirement: [f64; 3],
    ideal_water: f64,
) -> CropRow {
    CropRow {
        name,
        depletion,
        base_yield,
        price_per_quintal,
        requirement,
        ideal_water,
    }
}

const KHARIF_CROPS: &[CropRow] = &[
    row("Bajra", [30.0, 15.0, 15.0], 18.0, 2500.0, [60.0, 30.0, 30.0], 450.0),
    row("Cotton", [50.0, 25.0, 40.0], 15.0, 7020.0, [100.0, 50.0, 50.0], 800.0),
    row("Green Gram", [-12.0, 15.0, 10.0], 8.0, 8682.0, [20.0, 40.0, 20.0], 500.0),
    row("Groundnut", [-5.0, 20.0, 25.0], 18.0, 6377.0, [25.0, 50.0, 40.0], 600.0),
    row("Jowar", [40.0, 20.0, 20.0], 20.0, 3180.0, [80.0, 40.0, 40.0], 550.0),
    row("Maize", [55.0, 25.0, 25.0], 35.0, 2090.0, [120.0, 60.0, 40.0], 650.0),
    row("Ragi", [30.0, 15.0, 20.0], 25.0, 3846.0, [50.0, 40.0, 25.0], 600.0),
    row("Rice", [60.0, 25.0, 30.0], 45.0, 2183.0, [100.0, 50.0, 50.0], 1200.0),
    row("Soybean", [-15.0, 20.0, 30.0], 20.0, 4600.0, [30.0, 60.0, 40.0], 700.0),
    row("Sugarcane", [100.0, 40.0, 80.0], 800.0, 315.0, [250.0, 100.0, 120.0], 1800.0),
    row("Sunflower", [35.0, 30.0, 30.0], 12.0, 6760.0, [60.0, 90.0, 60.0], 550.0),
    row("Tur", [-10.0, 15.0, 15.0], 10.0, 7000.0, [25.0, 50.0, 25.0], 700.0),
];

const RABI_CROPS: &[CropRow] = &[
    row("Barley", [35.0, 20.0, 15.0], 28.0, 1735.0, [60.0, 30.0, 20.0], 400.0),
    row("Bengal Gram", [-10.0, 20.0, 15.0], 15.0, 5440.0, [20.0, 40.0, 20.0], 350.0),
    row("Coriander", [30.0, 20.0, 15.0], 8.0, 7000.0, [60.0, 30.0, 20.0], 350.0),
    row("Linseed", [30.0, 15.0, 15.0], 9.0, 5500.0, [50.0, 30.0, 30.0], 400.0),
    row("Mustard", [40.0, 20.0, 15.0], 14.0, 5650.0, [80.0, 40.0, 40.0], 350.0),
    row("Onion", [60.0, 30.0, 50.0], 200.0, 1500.0, [100.0, 50.0, 80.0], 550.0),
    row("Peas", [-8.0, 20.0, 15.0], 40.0, 3000.0, [25.0, 60.0, 40.0], 400.0),
    row("Potato", [80.0, 50.0, 90.0], 250.0, 1200.0, [150.0, 80.0, 100.0], 500.0),
    row("Rabi Jowar", [35.0, 20.0, 20.0], 15.0, 3225.0, [60.0, 30.0, 30.0], 500.0),
    row("Safflower", [35.0, 20.0, 15.0], 10.0, 5800.0, [60.0, 30.0, 30.0], 400.0),
    row("Wheat", [60.0, 30.0, 25.0], 35.0, 2275.0, [120.0, 60.0, 40.0], 450.0),
];

const KARNATAKA_RAINFALL: &[(&str, f64)] = &[
    ("Bangalore", 900.0),
    ("Mysore", 700.0),
    ("Hubli", 600.0),
    ("Belgaum", 800.0),
    ("Gulbarga", 500.0),
    ("Mangalore", 3500.0),
];

/// Crop profiles and agronomy for one season.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeasonData {
    /// Nutrient depletion profiles for every crop in the season.
    pub catalog: CropCatalog,
    /// Agronomic reference values for the same crops.
    pub agronomy: AgronomyTable,
}

/// Build the built-in data for a season.
///
/// # Errors
///
/// Returns [`CatalogError`] if the built-in tables are inconsistent
/// (duplicate or out-of-range rows).
pub fn season_data(season: Season) -> Result<SeasonData, CatalogError> {
    let rows = match season {
        Season::Kharif => KHARIF_CROPS,
        Season::Rabi => RABI_CROPS,
    };
    let mut data = SeasonData::default();
    for r in rows {
        let [dn, dp, dk] = r.depletion;
        data.catalog.insert(CropProfile::new(r.name, dn, dp, dk))?;
        data.agronomy.insert(
            CropName::from(r.name),
            CropAgronomy {
                base_yield: r.base_yield,
                price_per_quintal: r.price_per_quintal,
                requirement: NutrientState::from(r.requirement),
                ideal_water: r.ideal_water,
            },
        )?;
    }
    Ok(data)
}

/// Typical annual rainfall for the supported Karnataka regions.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidRainfall`] if the built-in table holds an
/// invalid value.
pub fn karnataka_regions() -> Result<RegionRainfall, CatalogError> {
    RegionRainfall::from_pairs(KARNATAKA_RAINFALL.iter().copied())
}
