//! Fitkit Units - Fitness unit tables and conversion engine
//!
//! Pure, deterministic conversions over fixed factor tables.
//!
//! Categories:
//! - Distance (mi, km, m, yd, ft)
//! - Weight (lb, kg, st)
//! - Height (in, ft, cm, m)
//! - Pace (min/mi, min/km)
//!
//! Plus BMI calculation and advisory range validation. Everything is a
//! value type created per call; concurrent callers never coordinate.

mod bmi;
mod convert;
mod info;
mod units;
pub mod validate;

pub use bmi::{calculate_bmi, calculate_bmi_with_details, BmiCategory};
pub use convert::{
    convert_distance, convert_height, convert_pace, convert_pace_with_details, convert_weight,
};
pub use info::{conversion_info, ConversionInfo};
pub use units::{DistanceUnit, HeightUnit, PaceUnit, WeightUnit};
