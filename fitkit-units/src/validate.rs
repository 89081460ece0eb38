//! Advisory sanity ranges per unit
//!
//! These checks are opt-in. The conversion engine never consults them:
//! a value outside its reasonable range still converts, and the caller
//! decides what to do with the diagnostic.

use crate::{DistanceUnit, HeightUnit, WeightUnit};
use fitkit_core::FitError;
use serde::Serialize;
use std::fmt;

/// Closed interval of values considered reasonable for a unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReasonableRange {
    pub min: f64,
    pub max: f64,
    pub unit_label: &'static str,
}

impl ReasonableRange {
    pub const fn new(min: f64, max: f64, unit_label: &'static str) -> Self {
        Self {
            min,
            max,
            unit_label,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Produce the advisory diagnostic for a value outside the range.
    pub fn check(&self, value: f64) -> Result<(), FitError> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(FitError::ValueOutOfRange {
                value,
                range: self.to_string(),
            })
        }
    }
}

impl fmt::Display for ReasonableRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} {}", self.min, self.max, self.unit_label)
    }
}

/// Reasonable pace window: 3:00 to 20:00 per mile
pub const PACE_SECONDS_RANGE: ReasonableRange = ReasonableRange::new(180.0, 1200.0, "s/mi");

/// Reasonable human age window in years
pub const AGE_RANGE: ReasonableRange = ReasonableRange::new(1.0, 120.0, "years");

pub const fn weight_range(unit: WeightUnit) -> ReasonableRange {
    match unit {
        WeightUnit::Pounds => ReasonableRange::new(50.0, 500.0, "lb"),
        WeightUnit::Kilograms => ReasonableRange::new(20.0, 250.0, "kg"),
        WeightUnit::Stones => ReasonableRange::new(3.0, 35.0, "st"),
    }
}

pub const fn height_range(unit: HeightUnit) -> ReasonableRange {
    match unit {
        HeightUnit::Inches => ReasonableRange::new(24.0, 96.0, "in"),
        HeightUnit::Feet => ReasonableRange::new(2.0, 8.0, "ft"),
        HeightUnit::Centimeters => ReasonableRange::new(60.0, 250.0, "cm"),
        HeightUnit::Meters => ReasonableRange::new(0.6, 2.5, "m"),
    }
}

pub const fn distance_range(unit: DistanceUnit) -> ReasonableRange {
    match unit {
        DistanceUnit::Miles => ReasonableRange::new(0.01, 1000.0, "mi"),
        DistanceUnit::Kilometers => ReasonableRange::new(0.01, 1600.0, "km"),
        DistanceUnit::Meters => ReasonableRange::new(1.0, 1_600_000.0, "m"),
        DistanceUnit::Yards => ReasonableRange::new(1.0, 1_750_000.0, "yd"),
        DistanceUnit::Feet => ReasonableRange::new(1.0, 5_280_000.0, "ft"),
    }
}

pub fn check_weight(value: f64, unit: WeightUnit) -> Result<(), FitError> {
    weight_range(unit).check(value)
}

pub fn check_height(value: f64, unit: HeightUnit) -> Result<(), FitError> {
    height_range(unit).check(value)
}

pub fn check_distance(value: f64, unit: DistanceUnit) -> Result<(), FitError> {
    distance_range(unit).check(value)
}

pub fn check_pace_seconds(seconds: i64) -> Result<(), FitError> {
    PACE_SECONDS_RANGE.check(seconds as f64)
}

pub fn check_age(age: u32) -> Result<(), FitError> {
    AGE_RANGE.check(f64::from(age))
}
