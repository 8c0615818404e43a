use tracing::debug;

use super::record::{DailyObservation, DailyResult};
use crate::atmosphere::{
    actual_vapor_pressure, saturation_vapor_pressure, vapor_pressure_deficit,
    vapor_pressure_gradient,
};
use crate::config::ModelConfig;
use crate::cwsi::{lower_baseline, stress_index, upper_baseline};
use crate::emissivity::{correct_target_temperature, surface_emissivity};
use crate::error::ModelError;
use crate::eta::actual_et;
use crate::vegetation::vegetation_indices;

/// Runs the four stages over one day's observation: vegetation indices,
/// emissivity and temperature correction, CWSI, ETa. Pure; the configuration
/// is read-only and nothing persists between calls.
pub fn compute(
    observation: &DailyObservation,
    config: &ModelConfig,
) -> Result<DailyResult, ModelError> {
    observation.validate()?;

    // Stage 1: reflectance bands to fractional vegetation cover
    let veg = vegetation_indices(
        observation.nir_reflectance,
        observation.red_reflectance,
        config,
    )?;

    // Stage 2: de-mix the brightness temperature
    let emissivity = surface_emissivity(veg.fc, config.emissivity_canopy, config.emissivity_soil)?;
    let background = config
        .background_temperature
        .resolve(observation.air_temperature);
    let corrected_target_temperature =
        correct_target_temperature(observation.target_temperature, emissivity, background)?;

    // Stage 3: vapor pressure terms, baselines, stress index
    let esat = saturation_vapor_pressure(observation.air_temperature);
    let ea = actual_vapor_pressure(observation.air_temperature, observation.relative_humidity);
    let vpd = vapor_pressure_deficit(esat, ea);
    let vpg = vapor_pressure_gradient(
        esat,
        observation.air_temperature,
        config.baseline_ll_intercept,
    );

    let dt_ll = lower_baseline(vpd, config.baseline_ll_slope, config.baseline_ll_intercept);
    let dt_ul = upper_baseline(vpg, config.baseline_ul_slope, config.baseline_ul_intercept);

    let cwsi = stress_index(
        corrected_target_temperature,
        observation.air_temperature,
        dt_ll,
        dt_ul,
    )?;

    // Stage 4: actual evapotranspiration
    let eta = actual_et(cwsi, observation.etc)?;

    debug!(cwsi, eta, "daily record computed");

    Ok(DailyResult {
        date: observation.date,
        ndvi: veg.ndvi,
        ndvi_scaled: veg.ndvi_scaled,
        fc: veg.fc,
        emissivity,
        corrected_target_temperature,
        esat,
        ea,
        vpd,
        vpg,
        dt_ll,
        dt_ul,
        cwsi,
        eta,
    })
}
