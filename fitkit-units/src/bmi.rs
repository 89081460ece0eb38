//! Body-mass index calculation and classification

use crate::{convert_height, convert_weight, HeightUnit, WeightUnit};
use fitkit_core::{CalculationKind, ConversionOutcome, FitError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// BMI is a derived estimate, not an exact unit conversion
const BMI_CONFIDENCE: f64 = 0.95;

/// WHO weight-status category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obesity,
}

impl BmiCategory {
    /// Classify a BMI value. Boundaries are left-inclusive: exactly 18.5
    /// is normal weight, exactly 25.0 is overweight, exactly 30.0 is
    /// obesity.
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::NormalWeight
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obesity
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obesity => "Obesity",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Calculate BMI, or `None` when either measurement is non-positive.
pub fn calculate_bmi(
    weight: f64,
    height: f64,
    weight_unit: WeightUnit,
    height_unit: HeightUnit,
) -> Option<f64> {
    calculate_bmi_with_details(weight, height, weight_unit, height_unit).value()
}

/// Calculate BMI with the full outcome: `weight_kg / height_m²`, rounded
/// to one decimal place half away from zero, with the category attached
/// as the note.
pub fn calculate_bmi_with_details(
    weight: f64,
    height: f64,
    weight_unit: WeightUnit,
    height_unit: HeightUnit,
) -> ConversionOutcome<f64> {
    let kind = CalculationKind::BodyMassIndex;

    if weight <= 0.0 || height <= 0.0 {
        return ConversionOutcome::failure(
            weight,
            kind,
            FitError::InvalidMeasurement(format!(
                "weight and height must be positive, got {weight} and {height}"
            )),
        )
        .with_units(weight_unit.info(), height_unit.info());
    }

    let kilograms = convert_weight(weight, weight_unit, WeightUnit::Kilograms);
    let meters = convert_height(height, height_unit, HeightUnit::Meters);

    let bmi = round_one_decimal(kilograms / (meters * meters));
    let category = BmiCategory::classify(bmi);

    ConversionOutcome::success(weight, bmi, kind, BMI_CONFIDENCE)
        .with_units(weight_unit.info(), height_unit.info())
        .with_note(category.label())
}

/// Round half away from zero to one decimal place
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
