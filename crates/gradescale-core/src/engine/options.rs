//! Conversion options and rounding

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GradeError;

/// Quotients this close to an integer count as that integer
const SNAP_TOLERANCE: f64 = 1e-9;

/// How snapping steps resolve values that fall between two legal values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingMode {
    #[default]
    Nearest,
    Floor,
    Ceil,
}

impl RoundingMode {
    fn apply(self, value: f64) -> f64 {
        match self {
            RoundingMode::Nearest => value.round(),
            RoundingMode::Floor => value.floor(),
            RoundingMode::Ceil => value.ceil(),
        }
    }
}

impl FromStr for RoundingMode {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nearest" => Ok(RoundingMode::Nearest),
            "floor" => Ok(RoundingMode::Floor),
            "ceil" => Ok(RoundingMode::Ceil),
            other => Err(GradeError::invalid_value("rounding mode", other)),
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundingMode::Nearest => write!(f, "nearest"),
            RoundingMode::Floor => write!(f, "floor"),
            RoundingMode::Ceil => write!(f, "ceil"),
        }
    }
}

/// Caller-supplied knobs for a conversion.
///
/// Options a given encoder has no use for are ignored:
/// - `rounding_mode` does not affect letter threshold selection or
///   competency bands.
/// - `preserve_precision` only applies to numeric and custom targets.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// Snap numeric/custom results to the source precision instead of the target's
    pub preserve_precision: bool,

    /// Rounding applied by every snapping step
    pub rounding_mode: RoundingMode,

    /// Clamp out-of-range source values instead of rejecting them
    pub allow_partial_conversion: bool,
}

/// Snap `value` to a multiple of `step`
pub fn snap(value: f64, step: f64, mode: RoundingMode) -> f64 {
    if step <= 0.0 || !step.is_finite() {
        return value;
    }
    let mut quotient = value / step;
    let nearest = quotient.round();
    if (quotient - nearest).abs() < SNAP_TOLERANCE {
        quotient = nearest;
    }
    clean(mode.apply(quotient) * step)
}

/// Round to `decimals` decimal places
pub fn round_decimals(value: f64, decimals: i32, mode: RoundingMode) -> f64 {
    snap(value, 10f64.powi(-decimals), mode)
}

/// Whether `value` is an integer multiple of `step`
pub fn is_multiple_of(value: f64, step: f64) -> bool {
    if step <= 0.0 || !step.is_finite() {
        return true;
    }
    let quotient = value / step;
    (quotient - quotient.round()).abs() < SNAP_TOLERANCE
}

// Drop float noise such as 7.300000000000001
fn clean(value: f64) -> f64 {
    let scaled = (value * 1e9).round() / 1e9;
    if scaled == 0.0 {
        0.0
    } else {
        scaled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_nearest() {
        assert_eq!(snap(13.3, 0.5, RoundingMode::Nearest), 13.5);
        assert_eq!(snap(13.2, 0.5, RoundingMode::Nearest), 13.0);
        assert_eq!(snap(7.3, 0.1, RoundingMode::Nearest), 7.3);
    }

    #[test]
    fn test_snap_floor_and_ceil() {
        assert_eq!(snap(13.4, 0.5, RoundingMode::Floor), 13.0);
        assert_eq!(snap(13.1, 0.5, RoundingMode::Ceil), 13.5);
        // exact multiples must not move under floor/ceil
        assert_eq!(snap(7.3, 0.1, RoundingMode::Floor), 7.3);
        assert_eq!(snap(7.3, 0.1, RoundingMode::Ceil), 7.3);
    }

    #[test]
    fn test_round_decimals() {
        assert_eq!(round_decimals(2.3456, 2, RoundingMode::Nearest), 2.35);
        assert_eq!(round_decimals(2.3456, 2, RoundingMode::Floor), 2.34);
    }

    #[test]
    fn test_is_multiple_of() {
        assert!(is_multiple_of(13.5, 0.5));
        assert!(!is_multiple_of(13.3, 0.5));
        assert!(is_multiple_of(7.3, 0.1));
        assert!(is_multiple_of(4.0, 0.0));
    }

    #[test]
    fn test_rounding_mode_from_str() {
        assert_eq!("CEIL".parse::<RoundingMode>().unwrap(), RoundingMode::Ceil);
        assert!("up".parse::<RoundingMode>().is_err());
    }

    #[test]
    fn test_options_default() {
        let options = ConversionOptions::default();
        assert!(!options.preserve_precision);
        assert!(!options.allow_partial_conversion);
        assert_eq!(options.rounding_mode, RoundingMode::Nearest);
    }
}
