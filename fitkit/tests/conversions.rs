//! End-to-end checks of the documented conversion behavior through the
//! facade crate.

use fitkit::prelude::*;
use fitkit::{
    calculate_bmi, calculate_bmi_with_details, conversion_info, convert_distance, convert_height,
    convert_pace, convert_pace_with_details, convert_weight,
};

const EPSILON: f64 = 1e-9;

#[test]
fn distance_round_trips_for_every_unit_pair() {
    for from in DistanceUnit::ALL {
        for to in DistanceUnit::ALL {
            let there = convert_distance(12.5, from, to).unwrap();
            let back = convert_distance(there, to, from).unwrap();
            assert!(
                (back - 12.5).abs() < EPSILON,
                "{from} -> {to} round trip drifted to {back}"
            );
        }
    }
}

#[test]
fn weight_and_height_round_trips() {
    for from in WeightUnit::ALL {
        for to in WeightUnit::ALL {
            let back = convert_weight(convert_weight(163.0, from, to), to, from);
            assert!((back - 163.0).abs() < EPSILON);
        }
    }
    for from in HeightUnit::ALL {
        for to in HeightUnit::ALL {
            let back = convert_height(convert_height(1.78, from, to), to, from);
            assert!((back - 1.78).abs() < EPSILON);
        }
    }
}

#[test]
fn same_unit_conversion_is_bit_exact() {
    // 0.1 has no exact binary representation; only a true short-circuit
    // returns it unchanged
    assert_eq!(
        convert_distance(0.1, DistanceUnit::Miles, DistanceUnit::Miles),
        Some(0.1)
    );
    assert_eq!(
        convert_distance(0.0, DistanceUnit::Yards, DistanceUnit::Yards),
        Some(0.0)
    );
    assert_eq!(
        convert_weight(0.1, WeightUnit::Stones, WeightUnit::Stones),
        0.1
    );
    assert_eq!(
        convert_height(0.1, HeightUnit::Feet, HeightUnit::Feet),
        0.1
    );
}

#[test]
fn documented_known_values() {
    let km = convert_distance(5.0, DistanceUnit::Miles, DistanceUnit::Kilometers).unwrap();
    assert!((km - 8.04672).abs() < 1e-5);

    let kg = convert_weight(150.0, WeightUnit::Pounds, WeightUnit::Kilograms);
    assert!((kg - 68.04).abs() < 1e-2);

    let cm = convert_height(68.0, HeightUnit::Inches, HeightUnit::Centimeters);
    assert!((cm - 172.72).abs() < EPSILON);

    assert_eq!(
        calculate_bmi(150.0, 68.0, WeightUnit::Pounds, HeightUnit::Inches),
        Some(22.8)
    );

    assert_eq!(
        convert_pace(
            &PaceValue::Clock("7:30".to_string()),
            PaceUnit::MinutesPerMile,
            PaceUnit::MinutesPerKilometer,
        ),
        Some(PaceValue::Clock("4:39".to_string()))
    );
}

#[test]
fn pace_inversion_recovers_within_truncation_bound() {
    // Each leg truncates up to one second, and the return leg scales the
    // outbound loss by the mile/kilometer distance ratio (1.609), so a
    // round trip can drift by up to two whole seconds. 333 hits the worst
    // case: 206.9 truncates to 206, and 206 * 1.609344 = 331.5 to 331.
    for seconds in [200, 279, 333, 450, 600, 725, 1100] {
        let original = PaceValue::Seconds(seconds);
        let there = convert_pace(
            &original,
            PaceUnit::MinutesPerMile,
            PaceUnit::MinutesPerKilometer,
        )
        .unwrap();
        let back = convert_pace(
            &there,
            PaceUnit::MinutesPerKilometer,
            PaceUnit::MinutesPerMile,
        )
        .unwrap();
        match back {
            PaceValue::Seconds(s) => {
                assert!((s - seconds).abs() <= 2, "{seconds} came back as {s}")
            }
            other => panic!("shape changed: {other:?}"),
        }
    }
}

#[test]
fn invalid_inputs_fail_with_documented_kinds() {
    // seconds field >= 60
    let outcome = convert_pace_with_details(
        &PaceValue::Clock("7:75".to_string()),
        PaceUnit::MinutesPerMile,
        PaceUnit::MinutesPerKilometer,
    );
    assert!(matches!(
        outcome.error,
        Some(FitError::InvalidPaceFormat(ref raw)) if raw == "7:75"
    ));

    // non-numeric pace text
    assert_eq!(
        convert_pace(
            &PaceValue::Clock("abc".to_string()),
            PaceUnit::MinutesPerMile,
            PaceUnit::MinutesPerMile,
        ),
        None
    );

    // negative pace and distance
    assert_eq!(
        convert_pace(
            &PaceValue::Minutes(-7.5),
            PaceUnit::MinutesPerMile,
            PaceUnit::MinutesPerKilometer,
        ),
        None
    );
    assert_eq!(
        convert_distance(-5.0, DistanceUnit::Miles, DistanceUnit::Kilometers),
        None
    );

    // degenerate BMI measurements
    let outcome = calculate_bmi_with_details(0.0, 68.0, WeightUnit::Pounds, HeightUnit::Inches);
    assert!(matches!(
        outcome.error,
        Some(FitError::InvalidMeasurement(_))
    ));
    assert_eq!(
        calculate_bmi(150.0, -68.0, WeightUnit::Pounds, HeightUnit::Inches),
        None
    );
}

#[test]
fn bmi_monotonic_in_weight_at_fixed_height() {
    let mut previous = 0.0;
    for weight in (90..=250).step_by(10) {
        let bmi = calculate_bmi(
            f64::from(weight),
            68.0,
            WeightUnit::Pounds,
            HeightUnit::Inches,
        )
        .unwrap();
        assert!(bmi > previous);
        previous = bmi;
    }
}

#[test]
fn bmi_category_boundaries() {
    assert_eq!(BmiCategory::classify(18.5), BmiCategory::NormalWeight);
    assert_eq!(BmiCategory::classify(25.0), BmiCategory::Overweight);
    assert_eq!(BmiCategory::classify(30.0), BmiCategory::Obesity);
}

#[test]
fn detailed_outcome_serializes_with_descriptors() {
    let outcome = convert_pace_with_details(
        &PaceValue::Seconds(450),
        PaceUnit::MinutesPerMile,
        PaceUnit::MinutesPerKilometer,
    );
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["kind"], "pace_conversion");
    assert_eq!(json["from_unit"]["abbrev"], "min/mi");
    assert_eq!(json["to_unit"]["category"], "pace");
    assert!(json.get("error").is_none());
}

#[test]
fn capability_manifest_matches_the_engine() {
    let info = conversion_info();
    assert_eq!(info.total_unit_conversions, 40);

    // every advertised distance pair actually converts
    for from in DistanceUnit::ALL {
        for to in DistanceUnit::ALL {
            assert!(convert_distance(1.0, from, to).is_some());
        }
    }
}
