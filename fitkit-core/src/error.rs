//! Recoverable calculation errors
//!
//! Errors never abort the process. Every failure is a plain data value
//! returned to the caller, either directly or carried inside a
//! `ConversionOutcome`. All failures stem from invalid input, so there is
//! nothing to retry.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for conversions and derived calculations
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum FitError {
    /// Pace text did not match the "M:SS" grammar, or a non-text pace
    /// shape held a value that cannot represent a pace (zero, negative)
    #[error("invalid pace format: {0}")]
    InvalidPaceFormat(String),

    /// A body measurement outside the formula's domain (e.g. zero weight)
    #[error("invalid measurement: {0}")]
    InvalidMeasurement(String),

    /// A derived formula could not produce a meaningful value
    #[error("calculation failed: {0}")]
    CalculationFailed(String),

    /// No conversion path between the named units
    #[error("unsupported conversion: {from} -> {to}")]
    UnsupportedConversion { from: String, to: String },

    /// Conversion produced an unrepresentable result (e.g. a pace of
    /// zero seconds after scaling)
    #[error("conversion failed: {0}")]
    ConversionFailed(String),

    /// Advisory diagnostic from the validation module. Never blocks a
    /// conversion.
    #[error("value {value} outside reasonable range {range}")]
    ValueOutOfRange { value: f64, range: String },
}
