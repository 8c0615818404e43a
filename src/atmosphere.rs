//! Vapor pressure relations
//!
//! Tetens-form saturation vapor pressure (FAO-56 coefficients) and the
//! derived quantities the stress index needs: actual vapor pressure, vapor
//! pressure deficit, and the vapor pressure gradient that drives the
//! non-transpiring upper baseline.

/// Tetens coefficients, kPa / deg C
pub const TETENS_E0: f64 = 0.6108;
pub const TETENS_A: f64 = 17.27;
pub const TETENS_B: f64 = 237.3;

/// Saturation vapor pressure (kPa) at a given air temperature (deg C).
pub fn saturation_vapor_pressure(temperature: f64) -> f64 {
    TETENS_E0 * (TETENS_A * temperature / (temperature + TETENS_B)).exp()
}

/// Actual vapor pressure (kPa) from air temperature (deg C) and relative
/// humidity (%).
pub fn actual_vapor_pressure(temperature: f64, relative_humidity: f64) -> f64 {
    relative_humidity * saturation_vapor_pressure(temperature) / 100.0
}

/// Vapor pressure deficit (kPa).
pub fn vapor_pressure_deficit(esat: f64, ea: f64) -> f64 {
    esat - ea
}

/// Vapor pressure gradient (kPa): the change in saturation vapor pressure
/// between the air temperature and the air temperature shifted by `offset`
/// deg C. With the Idso intercept as offset this is negative, which is what
/// pushes the upper baseline above the lower one.
pub fn vapor_pressure_gradient(esat: f64, temperature: f64, offset: f64) -> f64 {
    esat - saturation_vapor_pressure(temperature + offset)
}
