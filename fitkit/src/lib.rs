//! Fitkit - Fitness unit conversion and derived metrics
//!
//! A linkable computation library for embedding fitness math into
//! applications: running/walking pace, body-mass index, distance, weight,
//! and height, plus a few derived estimates (heart-rate zones, calories,
//! cadence).
//!
//! Everything is a pure, synchronous function over value types. There is
//! no shared mutable state, no I/O, and nothing to configure; concurrent
//! callers never need to coordinate.
//!
//! ```
//! use fitkit::prelude::*;
//!
//! let bmi = fitkit::calculate_bmi(150.0, 68.0, WeightUnit::Pounds, HeightUnit::Inches);
//! assert_eq!(bmi, Some(22.8));
//!
//! let pace = fitkit::convert_pace(
//!     &PaceValue::Clock("7:30".to_string()),
//!     PaceUnit::MinutesPerMile,
//!     PaceUnit::MinutesPerKilometer,
//! );
//! assert_eq!(pace, Some(PaceValue::Clock("4:39".to_string())));
//! ```

pub use fitkit_core::{
    format_clock, CalculationKind, ConversionOutcome, FitError, PaceValue, UnitCategory, UnitInfo,
};
pub use fitkit_metrics::{
    estimate_running_calories, heart_rate_zones, ideal_cadence, pace_to_speed,
    pace_value_to_speed, running_met, speed_to_pace, HeartRateZone,
};
pub use fitkit_units::{
    calculate_bmi, calculate_bmi_with_details, conversion_info, convert_distance, convert_height,
    convert_pace, convert_pace_with_details, convert_weight, validate, BmiCategory,
    ConversionInfo, DistanceUnit, HeightUnit, PaceUnit, WeightUnit,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use fitkit_core::prelude::*;
    pub use fitkit_units::{BmiCategory, DistanceUnit, HeightUnit, PaceUnit, WeightUnit};
}
