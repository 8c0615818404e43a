// Runs the full pipeline for a single day and prints every intermediate.

use notus::config::ModelConfig;
use notus::stress_model::{DailyObservation, compute};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ModelConfig::default();

    let observation = DailyObservation {
        date: None,
        air_temperature: 30.0,
        target_temperature: 28.0,
        relative_humidity: 40.0,
        nir_reflectance: 0.6,
        red_reflectance: 0.1,
        etc: 6.0,
    };

    let result = compute(&observation, &config)?;

    println!("Daily CWSI / ETa run");
    println!("  NDVI: {:.4} (scaled {:.4})", result.ndvi, result.ndvi_scaled);
    println!("  Fractional cover: {:.4}", result.fc);
    println!("  Surface emissivity: {:.4}", result.emissivity);
    println!(
        "  Corrected canopy temperature: {:.2} deg C (sensed {:.2})",
        result.corrected_target_temperature, observation.target_temperature
    );
    println!("  VPD: {:.3} kPa, VPG: {:.3} kPa", result.vpd, result.vpg);
    println!(
        "  Baselines: dT_LL = {:.2}, dT_UL = {:.2} deg C",
        result.dt_ll, result.dt_ul
    );
    println!("  CWSI: {:.3}", result.cwsi);
    println!("  ETa: {:.2} mm/day (ETc {:.2})", result.eta, observation.etc);

    Ok(())
}
