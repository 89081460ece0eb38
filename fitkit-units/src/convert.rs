//! Conversion engine for distance, weight, height, and pace
//!
//! Linear categories convert through their base unit. Same-unit requests
//! short-circuit and return the input untouched, so no floating-point
//! round trip can disturb an identity conversion.

use crate::{DistanceUnit, HeightUnit, PaceUnit, WeightUnit};
use fitkit_core::{CalculationKind, ConversionOutcome, PaceValue};

/// Cross-unit pace confidence: integer truncation can move a result by a
/// second, so never report full confidence.
const PACE_CONFIDENCE: f64 = 0.9;

/// Convert a distance between units.
///
/// Returns `None` for negative input; zero is a valid distance.
pub fn convert_distance(value: f64, from: DistanceUnit, to: DistanceUnit) -> Option<f64> {
    if value < 0.0 {
        return None;
    }
    if from == to {
        return Some(value);
    }
    Some(value * from.to_meters() / to.to_meters())
}

/// Convert a weight between units.
///
/// No sign guard: negative values pass through arithmetically. Callers
/// wanting sanity bounds use `validate::check_weight`.
pub fn convert_weight(value: f64, from: WeightUnit, to: WeightUnit) -> f64 {
    if from == to {
        return value;
    }
    value * from.to_kilograms() / to.to_kilograms()
}

/// Convert a height between units.
///
/// No sign guard, same contract as `convert_weight`.
pub fn convert_height(value: f64, from: HeightUnit, to: HeightUnit) -> f64 {
    if from == to {
        return value;
    }
    value * from.to_meters() / to.to_meters()
}

/// Convert a pace between units, keeping the caller's shape.
pub fn convert_pace(pace: &PaceValue, from: PaceUnit, to: PaceUnit) -> Option<PaceValue> {
    convert_pace_with_details(pace, from, to).value()
}

/// Convert a pace between units, reporting the full outcome.
///
/// Pace scales with the ratio of the two reference distances: covering a
/// shorter unit takes proportionally fewer seconds. The scaled seconds
/// total is truncated to a whole number and re-encoded into the same
/// shape the caller supplied.
pub fn convert_pace_with_details(
    pace: &PaceValue,
    from: PaceUnit,
    to: PaceUnit,
) -> ConversionOutcome<PaceValue> {
    let kind = CalculationKind::PaceConversion;

    let seconds = match pace.total_seconds() {
        Ok(s) => s,
        Err(e) => {
            return ConversionOutcome::failure(pace.clone(), kind, e)
                .with_units(from.info(), to.info())
        }
    };

    if from == to {
        return ConversionOutcome::success(pace.clone(), pace.clone(), kind, 1.0)
            .with_units(from.info(), to.info())
            .with_note("no conversion needed");
    }

    let scaled = (seconds as f64 * to.distance_meters() / from.distance_meters()) as i64;

    match PaceValue::from_seconds(scaled, pace) {
        Ok(converted) => {
            // Informational regardless of target unit: the speed a
            // per-mile reading of this pace corresponds to.
            let mph = 3600.0 / seconds as f64;
            ConversionOutcome::success(pace.clone(), converted, kind, PACE_CONFIDENCE)
                .with_units(from.info(), to.info())
                .with_note(format!("equivalent speed: {mph:.1} mph"))
        }
        Err(e) => ConversionOutcome::failure(pace.clone(), kind, e)
            .with_units(from.info(), to.info()),
    }
}
