//! Daily Crop Water Stress Index (CWSI) and actual evapotranspiration (ETa)
//!
//! Computes a daily CWSI from canopy temperature sensing and derives actual
//! evapotranspiration from it, for irrigation-management instruction and
//! demonstration. Inputs are per-day scalar records (air temperature, IRT
//! target temperature, relative humidity, NIR/Red reflectance, and a crop
//! evapotranspiration value ETc); the model is a fixed linear pipeline of
//! four pure stages:
//!
//! 1. **Vegetation indices** — NIR/Red to NDVI, scaled NDVI, and fractional
//!    vegetation cover ([`vegetation`]).
//! 2. **Emissivity and temperature correction** — mixed-pixel surface
//!    emissivity and radiometric de-mixing of the brightness temperature
//!    ([`emissivity`]).
//! 3. **CWSI** — canopy-air temperature difference positioned between the
//!    Idso (1982) non-water-stressed and non-transpiring baselines, driven
//!    by the vapor pressure deficit and gradient ([`atmosphere`], [`cwsi`]).
//! 4. **ETa** — ETa = ETc * (1 - CWSI) ([`eta`]).
//!
//! No stage holds state and no stage performs I/O; a series of days can be
//! evaluated sequentially or in parallel with identical results. Reading and
//! writing tabular inputs/outputs belongs to the surrounding tooling, not to
//! this crate.
//!
//! ## References
//!
//! - Idso, S. B. (1982). Non-water-stressed baselines: a key to measuring
//!   and interpreting plant water stress. *Agricultural Meteorology*, 27,
//!   59-70.
//! - Jackson, R. D., Idso, S. B., Reginato, R. J., & Pinter, P. J. (1981).
//!   Canopy temperature as a crop water stress indicator.
//!   *Water Resources Research*, 17(4), 1133-1138.
//! - Gillies, R. R., & Carlson, T. N. (1995). Thermal remote sensing of
//!   surface soil water content with partial vegetation cover.
//!   *Journal of Applied Meteorology*, 34, 745-756.
//!
//! ## Usage Example
//!
//! ```rust
//! use notus::config::ModelConfig;
//! use notus::stress_model::{DailyObservation, compute};
//!
//! let config = ModelConfig::default();
//!
//! let observation = DailyObservation {
//!     date: None,
//!     air_temperature: 30.0,
//!     target_temperature: 28.0,
//!     relative_humidity: 40.0,
//!     nir_reflectance: 0.6,
//!     red_reflectance: 0.1,
//!     etc: 6.0,
//! };
//!
//! let result = compute(&observation, &config).unwrap();
//! println!("CWSI: {:.3}, ETa: {:.2} mm/day", result.cwsi, result.eta);
//! ```

pub mod atmosphere;
pub mod config;
pub mod cwsi;
pub mod emissivity;
pub mod error;
pub mod eta;
pub mod stress_model;
pub mod vegetation;

pub use config::{BackgroundTemperature, ModelConfig};
pub use error::{ModelError, RecordError};
pub use stress_model::{DailyObservation, DailyResult, compute, compute_series, compute_series_par};
