//! Vegetation index stage
//!
//! Derives NDVI from the NIR/Red reflectance pair, rescales it between the
//! configured bare-soil and full-cover bounds, and converts the scaled value
//! into a fractional vegetation cover using the squared-NDVI curve of
//! Gillies & Carlson (1995).

use crate::config::ModelConfig;
use crate::error::ModelError;
use tracing::warn;

/// Output of the vegetation index stage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VegetationIndices {
    pub ndvi: f64,        // Normalized difference vegetation index [-1, 1]
    pub ndvi_scaled: f64, // NDVI rescaled to [0, 1] between soil and full cover
    pub fc: f64,          // Fractional vegetation cover [0, 1]
}

/// Normalized difference vegetation index from the NIR and Red bands.
pub fn ndvi(nir: f64, red: f64) -> Result<f64, ModelError> {
    if nir + red == 0.0 {
        return Err(ModelError::DivisionByZero {
            context: "NDVI reflectance sum (nir + red)",
        });
    }

    Ok((nir - red) / (nir + red))
}

/// Rescales NDVI between the bare-soil minimum and full-cover maximum.
/// Values falling outside the configured bounds are clamped to [0, 1] rather
/// than rejected: noisy reflectance routinely lands a little past the bounds.
pub fn scale_ndvi(ndvi: f64, ndvi_min: f64, ndvi_max: f64) -> f64 {
    let scaled = (ndvi - ndvi_min) / (ndvi_max - ndvi_min);

    if !(0.0..=1.0).contains(&scaled) {
        warn!(scaled, "scaled NDVI outside [0, 1], clamping");
    }

    scaled.clamp(0.0, 1.0)
}

/// Fractional vegetation cover from the scaled NDVI. Monotone on [0, 1] with
/// fc(0) = 0 and fc(1) = 1.
pub fn fractional_cover(ndvi_scaled: f64) -> f64 {
    ndvi_scaled.powi(2)
}

/// Runs the whole stage for one record.
pub fn vegetation_indices(
    nir: f64,
    red: f64,
    config: &ModelConfig,
) -> Result<VegetationIndices, ModelError> {
    let ndvi = ndvi(nir, red)?;
    let ndvi_scaled = scale_ndvi(ndvi, config.ndvi_min, config.ndvi_max);
    let fc = fractional_cover(ndvi_scaled);

    Ok(VegetationIndices {
        ndvi,
        ndvi_scaled,
        fc,
    })
}
