use serde::Deserialize;
use serde::Deserializer;
use serde::de::Error;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub mod error;
pub use error::ConfigError;

// Literature defaults: NDVI bounds for bare soil / full cover after
// Gillies & Carlson (1995), emissivities for green canopy and bare soil,
// Idso (1982) baseline coefficients, clear-sky background temperature.
pub const DEFAULT_NDVI_MIN: f64 = 0.15;
pub const DEFAULT_NDVI_MAX: f64 = 0.90;
pub const DEFAULT_EMISSIVITY_CANOPY: f64 = 0.98;
pub const DEFAULT_EMISSIVITY_SOIL: f64 = 0.93;
pub const DEFAULT_BASELINE_SLOPE: f64 = -1.97;
pub const DEFAULT_BASELINE_INTERCEPT: f64 = 3.11;
pub const DEFAULT_BACKGROUND_TEMPERATURE: f64 = -15.0;

/// Source of the background (sky or soil) temperature used when de-mixing
/// the brightness temperature. Explicit in config rather than implied.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundTemperature {
    /// A fixed temperature in deg C, e.g. -15 for a clear sky.
    Constant(f64),
    /// Use the record's own air temperature.
    AirTemperature,
}

impl BackgroundTemperature {
    pub fn resolve(&self, air_temperature: f64) -> f64 {
        match self {
            BackgroundTemperature::Constant(t) => *t,
            BackgroundTemperature::AirTemperature => air_temperature,
        }
    }
}

/// Read-only configuration threaded through every stage call. Shared freely
/// across concurrent evaluations; nothing here mutates during a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelConfig {
    /// NDVI of bare soil (maps to scaled NDVI 0).
    pub ndvi_min: f64,
    /// NDVI of full canopy cover (maps to scaled NDVI 1).
    pub ndvi_max: f64,
    pub emissivity_canopy: f64,
    pub emissivity_soil: f64,
    /// Lower (non-water-stressed) baseline: dT_LL = intercept + slope * VPD.
    pub baseline_ll_slope: f64,
    pub baseline_ll_intercept: f64,
    /// Upper (non-transpiring) baseline: dT_UL = intercept + slope * VPG.
    pub baseline_ul_slope: f64,
    pub baseline_ul_intercept: f64,
    pub background_temperature: BackgroundTemperature,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            ndvi_min: DEFAULT_NDVI_MIN,
            ndvi_max: DEFAULT_NDVI_MAX,
            emissivity_canopy: DEFAULT_EMISSIVITY_CANOPY,
            emissivity_soil: DEFAULT_EMISSIVITY_SOIL,
            baseline_ll_slope: DEFAULT_BASELINE_SLOPE,
            baseline_ll_intercept: DEFAULT_BASELINE_INTERCEPT,
            baseline_ul_slope: DEFAULT_BASELINE_SLOPE,
            baseline_ul_intercept: DEFAULT_BASELINE_INTERCEPT,
            background_temperature: BackgroundTemperature::Constant(
                DEFAULT_BACKGROUND_TEMPERATURE,
            ),
        }
    }
}

// Deserializes a ModelConfig, filling omitted options with the defaults and
// rejecting configurations the model cannot run with.
impl<'de> Deserialize<'de> for ModelConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ConfigHelper {
            ndvi_min: Option<f64>,
            ndvi_max: Option<f64>,
            emissivity_canopy: Option<f64>,
            emissivity_soil: Option<f64>,
            baseline_ll_slope: Option<f64>,
            baseline_ll_intercept: Option<f64>,
            baseline_ul_slope: Option<f64>,
            baseline_ul_intercept: Option<f64>,
            background_temperature: Option<BackgroundTemperature>,
        }

        let helper = ConfigHelper::deserialize(deserializer)?;
        let defaults = ModelConfig::default();

        let config = ModelConfig {
            ndvi_min: helper.ndvi_min.unwrap_or(defaults.ndvi_min),
            ndvi_max: helper.ndvi_max.unwrap_or(defaults.ndvi_max),
            emissivity_canopy: helper
                .emissivity_canopy
                .unwrap_or(defaults.emissivity_canopy),
            emissivity_soil: helper.emissivity_soil.unwrap_or(defaults.emissivity_soil),
            baseline_ll_slope: helper
                .baseline_ll_slope
                .unwrap_or(defaults.baseline_ll_slope),
            baseline_ll_intercept: helper
                .baseline_ll_intercept
                .unwrap_or(defaults.baseline_ll_intercept),
            baseline_ul_slope: helper
                .baseline_ul_slope
                .unwrap_or(defaults.baseline_ul_slope),
            baseline_ul_intercept: helper
                .baseline_ul_intercept
                .unwrap_or(defaults.baseline_ul_intercept),
            background_temperature: helper
                .background_temperature
                .unwrap_or(defaults.background_temperature),
        };

        config.validate().map_err(D::Error::custom)?;

        Ok(config)
    }
}

impl ModelConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<ModelConfig, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let config: ModelConfig = serde_json::from_reader(reader).map_err(ConfigError::from)?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalar_fields = [
            ("ndvi_min", self.ndvi_min),
            ("ndvi_max", self.ndvi_max),
            ("emissivity_canopy", self.emissivity_canopy),
            ("emissivity_soil", self.emissivity_soil),
            ("baseline_ll_slope", self.baseline_ll_slope),
            ("baseline_ll_intercept", self.baseline_ll_intercept),
            ("baseline_ul_slope", self.baseline_ul_slope),
            ("baseline_ul_intercept", self.baseline_ul_intercept),
        ];

        for (name, value) in scalar_fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite(name));
            }
        }

        if let BackgroundTemperature::Constant(t) = self.background_temperature
            && !t.is_finite()
        {
            return Err(ConfigError::NonFinite("background_temperature"));
        }

        if self.ndvi_min >= self.ndvi_max {
            return Err(ConfigError::NdviBounds);
        }

        if !(0.0..=1.0).contains(&self.emissivity_canopy) || self.emissivity_canopy == 0.0 {
            return Err(ConfigError::EmissivityRange("emissivity_canopy"));
        }

        if !(0.0..=1.0).contains(&self.emissivity_soil) || self.emissivity_soil == 0.0 {
            return Err(ConfigError::EmissivityRange("emissivity_soil"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_from_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("config.json");
        let mut file = File::create(&file_path).unwrap();

        let config_data = r#"
    {
        "ndvi_min": 0.2,
        "ndvi_max": 0.8,
        "emissivity_soil": 0.95,
        "background_temperature": { "constant": -20.0 }
    }
    "#;

        file.write_all(config_data.as_bytes()).unwrap();

        let config = ModelConfig::from_file(file_path).unwrap();

        assert_eq!(config.ndvi_min, 0.2);
        assert_eq!(config.ndvi_max, 0.8);
        assert_eq!(config.emissivity_soil, 0.95);

        // Omitted options keep the defaults
        assert_eq!(config.emissivity_canopy, DEFAULT_EMISSIVITY_CANOPY);
        assert_eq!(config.baseline_ll_slope, DEFAULT_BASELINE_SLOPE);

        assert_eq!(
            config.background_temperature,
            BackgroundTemperature::Constant(-20.0)
        );
    }

    #[test]
    fn test_background_from_air_temperature() {
        let config: ModelConfig =
            serde_json::from_str(r#"{ "background_temperature": "air_temperature" }"#).unwrap();

        assert_eq!(
            config.background_temperature,
            BackgroundTemperature::AirTemperature
        );
        assert_eq!(config.background_temperature.resolve(27.5), 27.5);

        let default = ModelConfig::default();
        assert_eq!(
            default.background_temperature.resolve(27.5),
            DEFAULT_BACKGROUND_TEMPERATURE
        );
    }

    #[test]
    fn test_rejects_inverted_ndvi_bounds() {
        let result: Result<ModelConfig, _> =
            serde_json::from_str(r#"{ "ndvi_min": 0.9, "ndvi_max": 0.15 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_out_of_range_emissivity() {
        let result: Result<ModelConfig, _> =
            serde_json::from_str(r#"{ "emissivity_soil": 0.0 }"#);
        assert!(result.is_err());

        let result: Result<ModelConfig, _> =
            serde_json::from_str(r#"{ "emissivity_canopy": 1.2 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ModelConfig::default().validate().is_ok());
    }
}
