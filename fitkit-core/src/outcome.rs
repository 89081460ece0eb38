//! Uniform outcome wrapper for conversions and derived calculations
//!
//! Every detailed API call returns a `ConversionOutcome`: the original
//! input, either an output or an error (never both), descriptors for the
//! units involved, and a heuristic confidence score.

use crate::FitError;
use serde::{Deserialize, Serialize};

/// Category a unit belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitCategory {
    Distance,
    Weight,
    Height,
    Pace,
}

/// Descriptor for a unit: display name, abbreviation, category.
///
/// Set explicitly when the unit is defined; nothing is inferred from the
/// runtime type of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnitInfo {
    pub name: &'static str,
    pub abbrev: &'static str,
    pub category: UnitCategory,
}

impl UnitInfo {
    pub const fn new(name: &'static str, abbrev: &'static str, category: UnitCategory) -> Self {
        Self {
            name,
            abbrev,
            category,
        }
    }
}

/// Calculation families the workspace can report.
///
/// The heart-rate and calorie kinds also reserve identifiers for
/// service-backed estimators; only the local formulas exist today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationKind {
    DistanceConversion,
    WeightConversion,
    HeightConversion,
    PaceConversion,
    BodyMassIndex,
    HeartRateZones,
    CalorieEstimate,
    CadenceEstimate,
    SpeedConversion,
}

impl CalculationKind {
    pub const ALL: [CalculationKind; 9] = [
        CalculationKind::DistanceConversion,
        CalculationKind::WeightConversion,
        CalculationKind::HeightConversion,
        CalculationKind::PaceConversion,
        CalculationKind::BodyMassIndex,
        CalculationKind::HeartRateZones,
        CalculationKind::CalorieEstimate,
        CalculationKind::CadenceEstimate,
        CalculationKind::SpeedConversion,
    ];
}

/// Result of a conversion or calculation
///
/// Invariant: success holds an output and no error; failure holds an
/// error and no output. The constructors are the only way to build one,
/// so the invariant cannot be broken from outside.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionOutcome<T> {
    /// The value the caller passed in
    pub input: T,

    /// Converted or calculated value, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<T>,

    /// Source unit descriptor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_unit: Option<UnitInfo>,

    /// Target unit descriptor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_unit: Option<UnitInfo>,

    /// What was calculated
    pub kind: CalculationKind,

    /// Heuristic reliability score in [0, 1]; 0 on failure
    pub confidence: f64,

    /// Human-readable diagnostic or context note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Why the calculation failed, present on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<FitError>,
}

impl<T> ConversionOutcome<T> {
    /// Create a successful outcome
    pub fn success(input: T, output: T, kind: CalculationKind, confidence: f64) -> Self {
        Self {
            input,
            output: Some(output),
            from_unit: None,
            to_unit: None,
            kind,
            confidence,
            note: None,
            error: None,
        }
    }

    /// Create a failed outcome; confidence is zero by definition
    pub fn failure(input: T, kind: CalculationKind, error: FitError) -> Self {
        Self {
            input,
            output: None,
            from_unit: None,
            to_unit: None,
            kind,
            confidence: 0.0,
            note: None,
            error: Some(error),
        }
    }

    /// Builder: attach source and target unit descriptors
    pub fn with_units(mut self, from: UnitInfo, to: UnitInfo) -> Self {
        self.from_unit = Some(from);
        self.to_unit = Some(to);
        self
    }

    /// Builder: attach a diagnostic note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn is_success(&self) -> bool {
        self.output.is_some() && self.error.is_none()
    }

    /// Consume the outcome, yielding the output value if successful.
    ///
    /// The simple (optional-returning) APIs are defined in terms of this,
    /// so the two API levels agree element for element.
    pub fn value(self) -> Option<T> {
        self.output
    }
}
