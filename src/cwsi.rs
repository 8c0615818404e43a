//! Crop water stress index stage
//!
//! Positions the canopy-air temperature difference between the Idso (1982)
//! empirical baselines: the lower (non-water-stressed) baseline is linear in
//! the vapor pressure deficit, the upper (non-transpiring) baseline linear in
//! the vapor pressure gradient. Both sets of coefficients come from the
//! configuration, not from hard-wired law.

use crate::error::ModelError;
use tracing::warn;

/// Non-water-stressed baseline dT_LL (deg C) at a given vapor pressure
/// deficit (kPa).
pub fn lower_baseline(vpd: f64, slope: f64, intercept: f64) -> f64 {
    intercept + slope * vpd
}

/// Non-transpiring baseline dT_UL (deg C) at a given vapor pressure gradient
/// (kPa).
pub fn upper_baseline(vpg: f64, slope: f64, intercept: f64) -> f64 {
    intercept + slope * vpg
}

/// Normalized position of the canopy-air temperature difference between the
/// two baselines, clamped to [0, 1]. Raw values outside the interval reflect
/// baseline-fit imprecision rather than invalid physics, so they are clamped
/// instead of propagated.
pub fn stress_index(
    corrected_target_temperature: f64,
    air_temperature: f64,
    dt_ll: f64,
    dt_ul: f64,
) -> Result<f64, ModelError> {
    let spread = dt_ul - dt_ll;

    if spread == 0.0 {
        return Err(ModelError::InvalidInput {
            field: "baselines",
            reason: format!(
                "upper and lower baselines coincide at {} deg C, index undefined",
                dt_ul
            ),
        });
    }

    let dt = corrected_target_temperature - air_temperature;
    let raw = (dt - dt_ll) / spread;

    if !(0.0..=1.0).contains(&raw) {
        warn!(raw, "raw CWSI outside [0, 1], clamping");
    }

    Ok(raw.clamp(0.0, 1.0))
}
