//! Heart-rate training zones via the Karvonen (heart-rate reserve) method

use fitkit_core::FitError;
use fitkit_units::validate;
use serde::Serialize;

/// Age-predicted maximum heart rate baseline (Fox formula: 220 - age)
const MAX_HR_BASELINE: f64 = 220.0;

/// Reserve-percentage bands for the seven zones, lowest intensity first.
/// The top zone runs to 100% of reserve, i.e. the age-predicted maximum.
const ZONE_BANDS: [(&str, f64, f64); 7] = [
    ("Recovery", 0.2, 0.3),
    ("Easy", 0.3, 0.4),
    ("Aerobic", 0.4, 0.5),
    ("Tempo", 0.5, 0.6),
    ("Threshold", 0.6, 0.7),
    ("Anaerobic", 0.7, 0.8),
    ("Maximum", 0.8, 1.0),
];

/// One training zone as a closed bpm band
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeartRateZone {
    pub name: &'static str,
    pub lower_bpm: f64,
    pub upper_bpm: f64,
}

/// Compute the seven Karvonen zones for an age and resting heart rate.
///
/// Each band is `resting + pct * reserve` where
/// `reserve = (220 - age) - resting`.
pub fn heart_rate_zones(age: u32, resting_hr: u32) -> Result<Vec<HeartRateZone>, FitError> {
    validate::check_age(age)?;

    let max_hr = MAX_HR_BASELINE - f64::from(age);
    let resting = f64::from(resting_hr);
    let reserve = max_hr - resting;

    if reserve <= 0.0 {
        return Err(FitError::CalculationFailed(format!(
            "resting heart rate {resting_hr} is at or above the age-predicted maximum {max_hr}"
        )));
    }

    Ok(ZONE_BANDS
        .iter()
        .map(|&(name, low, high)| HeartRateZone {
            name,
            lower_bpm: resting + low * reserve,
            upper_bpm: resting + high * reserve,
        })
        .collect())
}
