//! Fitkit Core - Fundamental types
//!
//! This crate provides the core types used throughout Fitkit:
//! - `PaceValue`: the three interchangeable pace shapes and their codec
//! - `ConversionOutcome`: uniform result wrapper with confidence and notes
//! - `FitError`: recoverable errors as plain data values

mod error;
mod outcome;
mod pace;

pub use error::FitError;
pub use outcome::{CalculationKind, ConversionOutcome, UnitCategory, UnitInfo};
pub use pace::{format_clock, PaceValue};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{CalculationKind, ConversionOutcome, FitError, PaceValue, UnitCategory, UnitInfo};
}
