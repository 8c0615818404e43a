//! Actual evapotranspiration stage
//!
//! ETa scales the crop (potential) evapotranspiration by how far the canopy
//! sits from full stress: ETa = ETc * (1 - CWSI).

use crate::error::ModelError;

/// Actual evapotranspiration (mm/day) from the stress index and the crop
/// evapotranspiration ETc (mm/day). With cwsi in [0, 1] the result is
/// guaranteed to lie in [0, etc].
pub fn actual_et(cwsi: f64, etc: f64) -> Result<f64, ModelError> {
    if !etc.is_finite() || etc < 0.0 {
        return Err(ModelError::InvalidInput {
            field: "etc",
            reason: format!("value {} is not a valid crop evapotranspiration", etc),
        });
    }

    Ok(etc * (1.0 - cwsi))
}
