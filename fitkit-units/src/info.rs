//! Static capability manifest
//!
//! A pure lookup describing what the engine can do: every unit in every
//! category, the supported calculation kinds, and the number of distinct
//! cross-unit conversions.

use crate::{DistanceUnit, HeightUnit, PaceUnit, WeightUnit};
use fitkit_core::{CalculationKind, UnitInfo};
use serde::Serialize;

/// Capability manifest for the conversion engine
#[derive(Debug, Clone, Serialize)]
pub struct ConversionInfo {
    pub distance_units: Vec<UnitInfo>,
    pub weight_units: Vec<UnitInfo>,
    pub height_units: Vec<UnitInfo>,
    pub pace_units: Vec<UnitInfo>,
    pub calculations: Vec<CalculationKind>,
    /// Count of ordered (from, to) pairs of distinct units across all
    /// categories
    pub total_unit_conversions: usize,
}

/// Describe every supported unit and calculation.
pub fn conversion_info() -> ConversionInfo {
    let distance_units: Vec<UnitInfo> = DistanceUnit::ALL.iter().map(|u| u.info()).collect();
    let weight_units: Vec<UnitInfo> = WeightUnit::ALL.iter().map(|u| u.info()).collect();
    let height_units: Vec<UnitInfo> = HeightUnit::ALL.iter().map(|u| u.info()).collect();
    let pace_units: Vec<UnitInfo> = PaceUnit::ALL.iter().map(|u| u.info()).collect();

    let total_unit_conversions = ordered_pairs(distance_units.len())
        + ordered_pairs(weight_units.len())
        + ordered_pairs(height_units.len())
        + ordered_pairs(pace_units.len());

    ConversionInfo {
        distance_units,
        weight_units,
        height_units,
        pace_units,
        calculations: CalculationKind::ALL.to_vec(),
        total_unit_conversions,
    }
}

fn ordered_pairs(n: usize) -> usize {
    n * n.saturating_sub(1)
}
