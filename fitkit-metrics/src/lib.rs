//! Fitkit Metrics - Derived fitness metrics
//!
//! Auxiliary formulas layered on the conversion engine:
//! - Heart-rate training zones (Karvonen method)
//! - Running calorie estimates (MET step table)
//! - Ideal cadence from height
//! - Speed/pace reciprocals
//!
//! All functions follow the never-panic philosophy: invalid input comes
//! back as a `FitError` value or `None`.

mod cadence;
mod calories;
mod heart_rate;
mod speed;

pub use cadence::ideal_cadence;
pub use calories::{estimate_running_calories, running_met};
pub use heart_rate::{heart_rate_zones, HeartRateZone};
pub use speed::{pace_to_speed, pace_value_to_speed, speed_to_pace};
