//! Running calorie estimate from a MET step table

use fitkit_core::FitError;
use fitkit_units::{convert_distance, convert_weight, DistanceUnit, WeightUnit};

/// MET by pace band (min/mi upper bound, MET), fastest band first.
/// Compendium-style running values: faster pace, higher MET.
const RUNNING_MET_TABLE: [(f64, f64); 6] = [
    (6.0, 16.0),
    (7.0, 14.0),
    (8.0, 12.0),
    (9.0, 10.0),
    (10.0, 8.5),
    (12.0, 7.0),
];

/// MET floor for paces slower than 12 min/mi
const RUNNING_MET_FLOOR: f64 = 5.0;

/// Select the MET value for a running pace in minutes per mile.
pub fn running_met(pace_min_per_mile: f64) -> f64 {
    for &(upper_bound, met) in &RUNNING_MET_TABLE {
        if pace_min_per_mile < upper_bound {
            return met;
        }
    }
    RUNNING_MET_FLOOR
}

/// Estimate calories burned running: `MET * weight_kg * hours`, where
/// `hours = pace * miles / 60`.
pub fn estimate_running_calories(
    pace_min_per_mile: f64,
    distance: f64,
    distance_unit: DistanceUnit,
    weight: f64,
    weight_unit: WeightUnit,
) -> Result<f64, FitError> {
    if pace_min_per_mile <= 0.0 || distance <= 0.0 || weight <= 0.0 {
        return Err(FitError::InvalidMeasurement(format!(
            "pace, distance, and weight must be positive, got {pace_min_per_mile}, {distance}, {weight}"
        )));
    }

    let miles = convert_distance(distance, distance_unit, DistanceUnit::Miles).ok_or_else(|| {
        FitError::InvalidMeasurement(format!("distance must be non-negative, got {distance}"))
    })?;
    let kilograms = convert_weight(weight, weight_unit, WeightUnit::Kilograms);

    let hours = pace_min_per_mile * miles / 60.0;
    Ok(running_met(pace_min_per_mile) * kilograms * hours)
}
