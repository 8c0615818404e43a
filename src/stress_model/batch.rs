use rayon::prelude::*;

use super::pipeline::compute;
use super::record::{DailyObservation, DailyResult};
use crate::config::ModelConfig;
use crate::error::RecordError;

/// Runs the pipeline over an ordered series of daily observations. Output
/// order matches input order and a bad record yields its own error slot
/// instead of aborting the series.
pub fn compute_series(
    observations: &[DailyObservation],
    config: &ModelConfig,
) -> Vec<Result<DailyResult, RecordError>> {
    observations
        .iter()
        .enumerate()
        .map(|(index, observation)| run_record(index, observation, config))
        .collect()
}

/// Same contract as [`compute_series`], evaluated across the rayon thread
/// pool. Records are independent, so the results are identical to the
/// sequential ones, in the same order.
pub fn compute_series_par(
    observations: &[DailyObservation],
    config: &ModelConfig,
) -> Vec<Result<DailyResult, RecordError>> {
    observations
        .par_iter()
        .enumerate()
        .map(|(index, observation)| run_record(index, observation, config))
        .collect()
}

fn run_record(
    index: usize,
    observation: &DailyObservation,
    config: &ModelConfig,
) -> Result<DailyResult, RecordError> {
    compute(observation, config).map_err(|source| RecordError {
        index,
        date: observation.date,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;
    use chrono::NaiveDate;

    fn season() -> Vec<DailyObservation> {
        let day = |d: u32| NaiveDate::from_ymd_opt(2024, 7, d);

        vec![
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
            // Dead sensor day: both bands zero
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
        ]
    }

    #[test]
    fn test_series_preserves_order_and_alignment() {
        let config = ModelConfig::default();
        let results = compute_series(&season(), &config);

        assert_eq!(results.len(), 4);
        assert!(results[0].is_ok());
        assert!(results[1].is_ok());
        assert!(results[3].is_ok());

        // The bad day fails alone, in its own slot
        let err = results[2].as_ref().unwrap_err();
        assert_eq!(err.index, 2);
        assert_eq!(err.date, NaiveDate::from_ymd_opt(2024, 7, 3));
        assert!(matches!(err.source, ModelError::DivisionByZero { .. }));

        // Dates travel through to the results
        assert_eq!(
            results[0].as_ref().unwrap().date,
            NaiveDate::from_ymd_opt(2024, 7, 1)
        );
    }

    #[test]
    fn test_parallel_matches_sequential_bit_for_bit() {
        let config = ModelConfig::default();
        let observations = season();

        let sequential = compute_series(&observations, &config);
        let parallel = compute_series_par(&observations, &config);

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_reference_record_inside_a_batch() {
        let config = ModelConfig::default();
        let results = compute_series_par(&season(), &config);

        let first = results[0].as_ref().unwrap();
        assert!((first.cwsi - 0.02726659134872894).abs() < 1e-6);
        assert!((first.eta - 5.836400451907627).abs() < 1e-6);
    }

    #[test]
    fn test_empty_series() {
        let config = ModelConfig::default();
        assert!(compute_series(&[], &config).is_empty());
        assert!(compute_series_par(&[], &config).is_empty());
    }
}
