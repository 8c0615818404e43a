// Runs a short multi-day series, including one bad sensor day, and prints a
// result-or-error line per record.

use chrono::NaiveDate;
use notus::config::ModelConfig;
use notus::stress_model::{DailyObservation, compute_series};

fn main() {
    tracing_subscriber::fmt().init();

    let config = ModelConfig::default();
    let day = |d: u32| NaiveDate::from_ymd_opt(2024, 7, d);

    let observations = vec![
        DailyObservation {
            date: day(1),
            air_temperature: 30.0,
            target_temperature: 28.0,
            relative_humidity: 40.0,
            nir_reflectance: 0.6,
            red_reflectance: 0.1,
            etc: 6.0,
        },
        DailyObservation {
            date: day(2),
            air_temperature: 25.0,
            target_temperature: 26.5,
            relative_humidity: 60.0,
            nir_reflectance: 0.45,
            red_reflectance: 0.18,
            etc: 4.5,
        },
        // Reflectance sensor failure
        DailyObservation {
            date: day(3),
            air_temperature: 28.0,
            target_temperature: 27.0,
            relative_humidity: 50.0,
            nir_reflectance: 0.0,
            red_reflectance: 0.0,
            etc: 5.0,
        },
        DailyObservation {
            date: day(4),
            air_temperature: 31.0,
            target_temperature: 36.0,
            relative_humidity: 25.0,
            nir_reflectance: 0.5,
            red_reflectance: 0.2,
            etc: 7.0,
        },
    ];

    println!("date        CWSI   ETa (mm/day)");
    for result in compute_series(&observations, &config) {
        match result {
            Ok(day) => println!(
                "{}  {:.3}  {:.2}",
                day.date.map(|d| d.to_string()).unwrap_or_default(),
                day.cwsi,
                day.eta
            ),
            Err(e) => println!("skipped: {}", e),
        }
    }
}
