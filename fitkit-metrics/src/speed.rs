//! Speed and pace are reciprocal views of the same motion

use fitkit_core::{FitError, PaceValue};

/// Miles per hour from decimal minutes per mile. `None` when the pace is
/// not positive.
pub fn pace_to_speed(pace_minutes: f64) -> Option<f64> {
    if pace_minutes <= 0.0 {
        return None;
    }
    Some(60.0 / pace_minutes)
}

/// Decimal minutes per mile from miles per hour. `None` when the speed is
/// not positive.
pub fn speed_to_pace(mph: f64) -> Option<f64> {
    if mph <= 0.0 {
        return None;
    }
    Some(60.0 / mph)
}

/// Miles per hour for any pace shape, reading the pace as per-mile.
pub fn pace_value_to_speed(pace: &PaceValue) -> Result<f64, FitError> {
    let seconds = pace.total_seconds()?;
    Ok(3600.0 / seconds as f64)
}
