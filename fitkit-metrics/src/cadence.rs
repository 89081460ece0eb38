//! Ideal running cadence from height

use fitkit_core::FitError;
use fitkit_units::{convert_height, HeightUnit};

/// Baseline cadence in steps per minute for a 68-inch runner
const BASELINE_CADENCE: f64 = 180.0;

/// Reference height the baseline is anchored to
const BASELINE_HEIGHT_INCHES: f64 = 68.0;

/// Cadence adjustment per inch of height; taller runners take slightly
/// fewer, longer steps
const CADENCE_PER_INCH: f64 = -0.5;

/// Estimate an ideal running cadence in steps per minute, rounded to the
/// nearest whole step.
pub fn ideal_cadence(height: f64, unit: HeightUnit) -> Result<i32, FitError> {
    if height <= 0.0 {
        return Err(FitError::InvalidMeasurement(format!(
            "height must be positive, got {height}"
        )));
    }

    let inches = convert_height(height, unit, HeightUnit::Inches);
    let cadence = BASELINE_CADENCE + (inches - BASELINE_HEIGHT_INCHES) * CADENCE_PER_INCH;
    Ok(cadence.round() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_height_gets_baseline_cadence() {
        assert_eq!(ideal_cadence(68.0, HeightUnit::Inches), Ok(180));
    }

    #[test]
    fn test_taller_runner_gets_lower_cadence() {
        assert_eq!(ideal_cadence(74.0, HeightUnit::Inches), Ok(177));
        assert_eq!(ideal_cadence(62.0, HeightUnit::Inches), Ok(183));
    }

    #[test]
    fn test_accepts_metric_height() {
        // 1.7272 m = 68 in
        assert_eq!(ideal_cadence(1.7272, HeightUnit::Meters), Ok(180));
        assert_eq!(ideal_cadence(172.72, HeightUnit::Centimeters), Ok(180));
    }

    #[test]
    fn test_rejects_non_positive_height() {
        assert!(ideal_cadence(0.0, HeightUnit::Inches).is_err());
        assert!(ideal_cadence(-68.0, HeightUnit::Inches).is_err());
    }
}
