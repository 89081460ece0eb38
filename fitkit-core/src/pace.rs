//! Pace values and the clock-string codec
//!
//! A pace is the total number of seconds needed to cover one unit of
//! distance. Callers see it in one of three interchangeable shapes: a
//! compound clock string ("7:30"), decimal minutes (7.5), or whole
//! seconds (450). The shapes are views of the same integer-seconds
//! quantity; which one a caller holds is decided by the variant, never by
//! sniffing the content.

use crate::FitError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A pace in one of its three external shapes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaceValue {
    /// Compound "M:SS" clock string
    Clock(String),
    /// Decimal minutes
    Minutes(f64),
    /// Whole seconds
    Seconds(i64),
}

impl PaceValue {
    /// Decode to total seconds.
    ///
    /// A pace of zero seconds is invalid in every shape: it would mean
    /// covering the unit distance in no time at all.
    pub fn total_seconds(&self) -> Result<i64, FitError> {
        match self {
            PaceValue::Clock(raw) => parse_clock(raw),
            PaceValue::Minutes(minutes) => {
                if *minutes <= 0.0 {
                    return Err(FitError::InvalidPaceFormat(format!(
                        "non-positive minutes: {minutes}"
                    )));
                }
                // Truncation toward zero, not rounding: fractional seconds
                // are dropped, and downstream clock strings depend on it.
                let seconds = (minutes * 60.0) as i64;
                if seconds == 0 {
                    return Err(FitError::InvalidPaceFormat(format!(
                        "pace under one second: {minutes} minutes"
                    )));
                }
                Ok(seconds)
            }
            PaceValue::Seconds(seconds) => {
                if *seconds <= 0 {
                    return Err(FitError::InvalidPaceFormat(format!(
                        "non-positive seconds: {seconds}"
                    )));
                }
                Ok(*seconds)
            }
        }
    }

    /// Encode a seconds total into the same shape as `shape`.
    pub fn from_seconds(seconds: i64, shape: &PaceValue) -> Result<PaceValue, FitError> {
        if seconds <= 0 {
            return Err(FitError::ConversionFailed(format!(
                "cannot encode a pace of {seconds} seconds"
            )));
        }
        Ok(match shape {
            PaceValue::Clock(_) => PaceValue::Clock(format_clock(seconds)),
            PaceValue::Minutes(_) => PaceValue::Minutes(seconds as f64 / 60.0),
            PaceValue::Seconds(_) => PaceValue::Seconds(seconds),
        })
    }
}

impl fmt::Display for PaceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.total_seconds() {
            Ok(seconds) => write!(f, "{}", format_clock(seconds)),
            Err(_) => match self {
                PaceValue::Clock(raw) => write!(f, "{raw}"),
                PaceValue::Minutes(minutes) => write!(f, "{minutes}"),
                PaceValue::Seconds(seconds) => write!(f, "{seconds}"),
            },
        }
    }
}

/// Format a seconds total as "M:SS" with zero-padded seconds (279 -> "4:39").
///
/// Negative totals render with a single leading sign (-65 -> "-1:05").
/// The codec itself never produces one; this only matters for direct
/// callers.
pub fn format_clock(seconds: i64) -> String {
    let sign = if seconds < 0 { "-" } else { "" };
    let total = seconds.unsigned_abs();
    format!("{sign}{}:{:02}", total / 60, total % 60)
}

/// Parse "M:SS" into total seconds.
///
/// Exactly two fields split on ':', both non-negative integers, seconds
/// field below 60, total above zero.
fn parse_clock(raw: &str) -> Result<i64, FitError> {
    let invalid = || FitError::InvalidPaceFormat(raw.to_string());

    let (minutes_text, seconds_text) = raw.trim().split_once(':').ok_or_else(invalid)?;
    if seconds_text.contains(':') {
        return Err(invalid());
    }

    let minutes: i64 = minutes_text.trim().parse().map_err(|_| invalid())?;
    let seconds: i64 = seconds_text.trim().parse().map_err(|_| invalid())?;

    if minutes < 0 || seconds < 0 || seconds >= 60 {
        return Err(invalid());
    }

    let total = minutes * 60 + seconds;
    if total == 0 {
        return Err(invalid());
    }
    Ok(total)
}
