//! Confidence and exactness heuristics
//!
//! Both are functions of the pair of systems only, never of the value being
//! converted. The constants are fixed contract values surfaced to callers.

use crate::system::{NotationSystem, ScaleType};

/// Source and target share a scale kind
pub const SAME_KIND_CONFIDENCE: f64 = 0.95;
/// Letter to competency or back
pub const LETTER_COMPETENCY_CONFIDENCE: f64 = 0.70;
/// Either side is a custom scale
pub const CUSTOM_CONFIDENCE: f64 = 0.60;
/// Any other cross-kind pair
pub const CROSS_KIND_CONFIDENCE: f64 = 0.80;

/// Heuristic reliability of converting between two scale kinds
pub fn confidence(from: ScaleType, to: ScaleType) -> f64 {
    match (from, to) {
        (a, b) if a == b => SAME_KIND_CONFIDENCE,
        (ScaleType::Letter, ScaleType::Competency) | (ScaleType::Competency, ScaleType::Letter) => {
            LETTER_COMPETENCY_CONFIDENCE
        }
        (ScaleType::Custom, _) | (_, ScaleType::Custom) => CUSTOM_CONFIDENCE,
        _ => CROSS_KIND_CONFIDENCE,
    }
}

/// Whether a conversion can never lose resolution.
///
/// Only same-kind conversions into an equal or wider range qualify.
pub fn is_exact(from: &NotationSystem, to: &NotationSystem) -> bool {
    from.scale_type() == to.scale_type() && from.range() <= to.range()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::{NumericRules, ScaleRules};

    fn numeric(max: f64) -> NotationSystem {
        NotationSystem::new(
            "n",
            "N",
            0.0,
            max,
            ScaleRules::Numeric(NumericRules::default()),
        )
    }

    #[test]
    fn test_confidence_table() {
        use ScaleType::*;
        assert_eq!(confidence(Numeric, Numeric), 0.95);
        assert_eq!(confidence(Custom, Custom), 0.95);
        assert_eq!(confidence(Letter, Competency), 0.70);
        assert_eq!(confidence(Competency, Letter), 0.70);
        assert_eq!(confidence(Custom, Letter), 0.60);
        assert_eq!(confidence(Numeric, Custom), 0.60);
        assert_eq!(confidence(Numeric, Letter), 0.80);
        assert_eq!(confidence(Competency, Numeric), 0.80);
    }

    #[test]
    fn test_exactness_follows_range_width() {
        assert!(is_exact(&numeric(20.0), &numeric(100.0)));
        assert!(is_exact(&numeric(20.0), &numeric(20.0)));
        assert!(!is_exact(&numeric(100.0), &numeric(20.0)));
    }
}
