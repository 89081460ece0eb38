//! Unit definitions with fixed to-base conversion factors
//!
//! Each category converts through its base unit: meters for distance and
//! height, kilograms for weight. The factors are compiled-in constants,
//! defined once and never mutated, so lookups need no synchronization.

use fitkit_core::{UnitCategory, UnitInfo};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Distance units, base unit meters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    Miles,
    Kilometers,
    Meters,
    Yards,
    Feet,
}

impl DistanceUnit {
    pub const ALL: [DistanceUnit; 5] = [
        DistanceUnit::Miles,
        DistanceUnit::Kilometers,
        DistanceUnit::Meters,
        DistanceUnit::Yards,
        DistanceUnit::Feet,
    ];

    /// Factor to meters: `value_m = value * to_meters()`
    pub const fn to_meters(self) -> f64 {
        match self {
            DistanceUnit::Miles => 1609.344,
            DistanceUnit::Kilometers => 1000.0,
            DistanceUnit::Meters => 1.0,
            DistanceUnit::Yards => 0.9144,
            DistanceUnit::Feet => 0.3048,
        }
    }

    pub const fn info(self) -> UnitInfo {
        match self {
            DistanceUnit::Miles => UnitInfo::new("miles", "mi", UnitCategory::Distance),
            DistanceUnit::Kilometers => UnitInfo::new("kilometers", "km", UnitCategory::Distance),
            DistanceUnit::Meters => UnitInfo::new("meters", "m", UnitCategory::Distance),
            DistanceUnit::Yards => UnitInfo::new("yards", "yd", UnitCategory::Distance),
            DistanceUnit::Feet => UnitInfo::new("feet", "ft", UnitCategory::Distance),
        }
    }
}

/// Weight units, base unit kilograms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    Pounds,
    Kilograms,
    Stones,
}

impl WeightUnit {
    pub const ALL: [WeightUnit; 3] = [
        WeightUnit::Pounds,
        WeightUnit::Kilograms,
        WeightUnit::Stones,
    ];

    /// Factor to kilograms: `value_kg = value * to_kilograms()`
    pub const fn to_kilograms(self) -> f64 {
        match self {
            WeightUnit::Pounds => 0.453592,
            WeightUnit::Kilograms => 1.0,
            WeightUnit::Stones => 6.35029,
        }
    }

    pub const fn info(self) -> UnitInfo {
        match self {
            WeightUnit::Pounds => UnitInfo::new("pounds", "lb", UnitCategory::Weight),
            WeightUnit::Kilograms => UnitInfo::new("kilograms", "kg", UnitCategory::Weight),
            WeightUnit::Stones => UnitInfo::new("stones", "st", UnitCategory::Weight),
        }
    }
}

/// Height units, base unit meters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeightUnit {
    Inches,
    Feet,
    Centimeters,
    Meters,
}

impl HeightUnit {
    pub const ALL: [HeightUnit; 4] = [
        HeightUnit::Inches,
        HeightUnit::Feet,
        HeightUnit::Centimeters,
        HeightUnit::Meters,
    ];

    /// Factor to meters: `value_m = value * to_meters()`
    pub const fn to_meters(self) -> f64 {
        match self {
            HeightUnit::Inches => 0.0254,
            HeightUnit::Feet => 0.3048,
            HeightUnit::Centimeters => 0.01,
            HeightUnit::Meters => 1.0,
        }
    }

    pub const fn info(self) -> UnitInfo {
        match self {
            HeightUnit::Inches => UnitInfo::new("inches", "in", UnitCategory::Height),
            HeightUnit::Feet => UnitInfo::new("feet", "ft", UnitCategory::Height),
            HeightUnit::Centimeters => UnitInfo::new("centimeters", "cm", UnitCategory::Height),
            HeightUnit::Meters => UnitInfo::new("meters", "m", UnitCategory::Height),
        }
    }
}

/// Pace units.
///
/// Pace is not a linear unit: it is inversely related to distance, so a
/// pace unit carries the length of its reference distance instead of a
/// to-base factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaceUnit {
    MinutesPerMile,
    MinutesPerKilometer,
}

impl PaceUnit {
    pub const ALL: [PaceUnit; 2] = [PaceUnit::MinutesPerMile, PaceUnit::MinutesPerKilometer];

    /// Length of the reference distance in meters
    pub const fn distance_meters(self) -> f64 {
        match self {
            PaceUnit::MinutesPerMile => 1609.344,
            PaceUnit::MinutesPerKilometer => 1000.0,
        }
    }

    pub const fn info(self) -> UnitInfo {
        match self {
            PaceUnit::MinutesPerMile => {
                UnitInfo::new("minutes per mile", "min/mi", UnitCategory::Pace)
            }
            PaceUnit::MinutesPerKilometer => {
                UnitInfo::new("minutes per kilometer", "min/km", UnitCategory::Pace)
            }
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.info().abbrev)
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.info().abbrev)
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.info().abbrev)
    }
}

impl fmt::Display for PaceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.info().abbrev)
    }
}
