//! End-to-end checks of the derived-metric helpers through the facade.

use fitkit::prelude::*;
use fitkit::{
    estimate_running_calories, heart_rate_zones, ideal_cadence, pace_to_speed,
    pace_value_to_speed, speed_to_pace, validate,
};

#[test]
fn heart_rate_zones_cover_resting_to_max() {
    let zones = heart_rate_zones(35, 58).unwrap();
    assert_eq!(zones.len(), 7);

    let max_hr = 220.0 - 35.0;
    assert!(zones[0].lower_bpm > 58.0);
    assert_eq!(zones[6].upper_bpm, max_hr);

    for zone in &zones {
        assert!(zone.lower_bpm < zone.upper_bpm, "empty band {}", zone.name);
    }
}

#[test]
fn calorie_estimate_scales_with_distance() {
    let short =
        estimate_running_calories(9.0, 2.0, DistanceUnit::Miles, 70.0, WeightUnit::Kilograms)
            .unwrap();
    let long =
        estimate_running_calories(9.0, 4.0, DistanceUnit::Miles, 70.0, WeightUnit::Kilograms)
            .unwrap();
    assert!((long - 2.0 * short).abs() < 1e-9);
}

#[test]
fn cadence_tracks_height_inversely() {
    let tall = ideal_cadence(76.0, HeightUnit::Inches).unwrap();
    let short = ideal_cadence(60.0, HeightUnit::Inches).unwrap();
    assert!(tall < short);
}

#[test]
fn speed_and_pace_are_reciprocal() {
    let mph = pace_to_speed(7.5).unwrap();
    assert_eq!(mph, 8.0);
    assert_eq!(speed_to_pace(mph), Some(7.5));

    let from_clock = pace_value_to_speed(&PaceValue::Clock("7:30".to_string())).unwrap();
    assert_eq!(from_clock, mph);
}

#[test]
fn advisory_checks_never_block_conversions() {
    // 600 lb is outside the reasonable range but still converts
    assert!(validate::check_weight(600.0, WeightUnit::Pounds).is_err());
    let kg = fitkit::convert_weight(600.0, WeightUnit::Pounds, WeightUnit::Kilograms);
    assert!(kg > 0.0);

    // the diagnostic carries the offending value and a readable range
    match validate::check_weight(600.0, WeightUnit::Pounds) {
        Err(FitError::ValueOutOfRange { value, range }) => {
            assert_eq!(value, 600.0);
            assert!(range.contains("lb"));
        }
        other => panic!("expected out-of-range diagnostic, got {other:?}"),
    }
}
