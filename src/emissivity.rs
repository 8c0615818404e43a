//! Emissivity and temperature correction stage
//!
//! A mixed pixel sees both canopy and soil, so the surface emissivity is the
//! cover-weighted combination of the two, and the IRT brightness temperature
//! has to be de-mixed against the reflected background radiance before it can
//! stand in for the true canopy temperature.

use crate::error::ModelError;

/// Cover-weighted surface emissivity, clamped to (0, 1].
pub fn surface_emissivity(
    fc: f64,
    emissivity_canopy: f64,
    emissivity_soil: f64,
) -> Result<f64, ModelError> {
    let emissivity = fc * emissivity_canopy + (1.0 - fc) * emissivity_soil;

    if emissivity <= 0.0 {
        return Err(ModelError::InvalidInput {
            field: "emissivity",
            reason: format!("mixed-pixel emissivity {} is not positive", emissivity),
        });
    }

    Ok(emissivity.min(1.0))
}

/// Corrects the sensed brightness temperature (deg C) for surface emissivity
/// and the reflected radiance of the background at `background_temperature`.
/// At emissivity 1 the correction reduces to the identity.
pub fn correct_target_temperature(
    target_temperature: f64,
    emissivity: f64,
    background_temperature: f64,
) -> Result<f64, ModelError> {
    if emissivity <= 0.0 {
        return Err(ModelError::InvalidInput {
            field: "emissivity",
            reason: format!("emissivity {} is not positive", emissivity),
        });
    }

    let reflected = (1.0 - emissivity) * background_temperature.powi(4);
    let quartic = (target_temperature.powi(4) - reflected) / emissivity;

    if quartic < 0.0 {
        return Err(ModelError::InvalidInput {
            field: "target_temperature",
            reason: format!(
                "reflected background radiance exceeds the sensed signal \
                 (target {} deg C, background {} deg C, emissivity {})",
                target_temperature, background_temperature, emissivity
            ),
        });
    }

    Ok(quartic.powf(0.25))
}
