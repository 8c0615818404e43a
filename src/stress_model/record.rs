use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// One day's worth of pre-supplied inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyObservation {
    /// Calendar tag for presentation and error reporting only; the model
    /// itself never reads it.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub air_temperature: f64,    // Weather station air temperature [deg C]
    pub target_temperature: f64, // IRT brightness temperature, pre-correction [deg C]
    pub relative_humidity: f64,  // [%], 0 to 100
    pub nir_reflectance: f64,    // Near-infrared band [unitless]
    pub red_reflectance: f64,    // Red band [unitless]
    pub etc: f64,                // Crop (potential) evapotranspiration [mm/day]
}

impl DailyObservation {
    /// A record can only enter the pipeline if every field is finite and the
    /// relative humidity is a percentage.
    pub fn validate(&self) -> Result<(), ModelError> {
        let fields = [
            ("air_temperature", self.air_temperature),
            ("target_temperature", self.target_temperature),
            ("relative_humidity", self.relative_humidity),
            ("nir_reflectance", self.nir_reflectance),
            ("red_reflectance", self.red_reflectance),
            ("etc", self.etc),
        ];

        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ModelError::InvalidInput {
                    field,
                    reason: format!("value {} is not finite", value),
                });
            }
        }

        if !(0.0..=100.0).contains(&self.relative_humidity) {
            return Err(ModelError::InvalidInput {
                field: "relative_humidity",
                reason: format!("value {} is outside [0, 100]", self.relative_humidity),
            });
        }

        Ok(())
    }
}

/// One day's model output. Every intermediate is surfaced so downstream
/// consumers and tests can inspect each stage on its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyResult {
    pub date: Option<NaiveDate>,
    pub ndvi: f64,                         // [-1, 1]
    pub ndvi_scaled: f64,                  // [0, 1]
    pub fc: f64,                           // Fractional vegetation cover [0, 1]
    pub emissivity: f64,                   // Mixed-pixel surface emissivity (0, 1]
    pub corrected_target_temperature: f64, // [deg C]
    pub esat: f64,                         // Saturation vapor pressure [kPa]
    pub ea: f64,                           // Actual vapor pressure [kPa]
    pub vpd: f64,                          // Vapor pressure deficit [kPa]
    pub vpg: f64,                          // Vapor pressure gradient [kPa]
    pub dt_ll: f64,                        // Lower (non-water-stressed) baseline [deg C]
    pub dt_ul: f64,                        // Upper (non-transpiring) baseline [deg C]
    pub cwsi: f64,                         // Crop water stress index [0, 1]
    pub eta: f64,                          // Actual evapotranspiration [mm/day]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_observation() -> DailyObservation {
        DailyObservation {
            date: None,
            air_temperature: 30.0,
            target_temperature: 28.0,
            relative_humidity: 40.0,
            nir_reflectance: 0.6,
            red_reflectance: 0.1,
            etc: 6.0,
        }
    }

    #[test]
    fn test_valid_observation_passes() {
        assert!(valid_observation().validate().is_ok());
    }

    #[test]
    fn test_non_finite_field_is_named() {
        let mut obs = valid_observation();
        obs.nir_reflectance = f64::NAN;

        let err = obs.validate().unwrap_err();
        assert!(matches!(
            err,
            ModelError::InvalidInput {
                field: "nir_reflectance",
                ..
            }
        ));

        let mut obs = valid_observation();
        obs.etc = f64::INFINITY;
        let err = obs.validate().unwrap_err();
        assert!(matches!(err, ModelError::InvalidInput { field: "etc", .. }));
    }

    #[test]
    fn test_relative_humidity_domain() {
        let mut obs = valid_observation();
        obs.relative_humidity = 101.0;
        assert!(obs.validate().is_err());

        obs.relative_humidity = -0.1;
        assert!(obs.validate().is_err());

        obs.relative_humidity = 0.0;
        assert!(obs.validate().is_ok());

        obs.relative_humidity = 100.0;
        assert!(obs.validate().is_ok());
    }

    #[test]
    fn test_observation_round_trips_through_json() {
        let obs = DailyObservation {
            date: NaiveDate::from_ymd_opt(2024, 7, 14),
            ..valid_observation()
        };

        let json = serde_json::to_string(&obs).unwrap();
        let back: DailyObservation = serde_json::from_str(&json).unwrap();
        assert_eq!(obs, back);
    }
}
