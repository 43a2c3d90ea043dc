//! Error types for the `rotation-catalog` crate.
//!
//! All fallible operations in this crate return [`CatalogError`].

use rotation_types::CropName;

/// Errors that can occur when building or querying catalog data.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// No profile exists for the requested crop.
    #[error("unknown crop: {0}")]
    UnknownCrop(CropName),

    /// A crop was inserted twice where names must be unique.
    #[error("duplicate crop: {0}")]
    DuplicateCrop(CropName),

    /// A crop record carries a value the planner cannot use.
    #[error("invalid data for crop {crop}: {reason}")]
    InvalidCrop {
        /// The offending crop.
        crop: CropName,
        /// What is wrong with the record.
        reason: String,
    },

    /// A region was given a rainfall value that is negative or not finite.
    #[error("invalid rainfall for region {region}: {rainfall_mm}")]
    InvalidRainfall {
        /// The offending region.
        region: String,
        /// The rejected value in millimetres.
        rainfall_mm: f64,
    },
}
