//! Pairwise converters
//!
//! Same-kind pairs rescale linearly between ranges. Cross-kind pairs go
//! through a 0-100 percentage and are re-encoded in the target kind.

use super::options::{round_decimals, snap, ConversionOptions};
use crate::system::{CompetencyRules, LetterRules, NotationSystem, ScaleRules, ScaleType};

/// At or above this percentage a competency is mastered (target maximum)
pub const EXPERT_BAND: f64 = 85.0;
/// At or above this percentage a competency is acquired (passing level)
pub const ACQUIRED_BAND: f64 = 70.0;
/// At or above this percentage a competency is in progress (passing level - 1)
pub const IN_PROGRESS_BAND: f64 = 50.0;

/// Tolerance for threshold comparisons on percentages
const PERCENT_EPSILON: f64 = 1e-9;

/// Strategy chosen for an ordered pair of systems
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConverterKind {
    SameType,
    CrossType,
}

impl ConverterKind {
    pub fn for_pair(from: &NotationSystem, to: &NotationSystem) -> Self {
        if from.scale_type() == to.scale_type() {
            ConverterKind::SameType
        } else {
            ConverterKind::CrossType
        }
    }

    /// Convert an in-range `value` of `from` into `to`
    pub fn apply(
        self,
        from: &NotationSystem,
        to: &NotationSystem,
        value: f64,
        options: &ConversionOptions,
    ) -> f64 {
        let converted = match self {
            ConverterKind::SameType => convert_same_type(from, to, value, options),
            ConverterKind::CrossType => encode(from, to, to_percentage(from, value), options),
        };
        to.clamp(converted)
    }
}

/// Linear rescale between two systems of the same kind
pub fn convert_same_type(
    from: &NotationSystem,
    to: &NotationSystem,
    value: f64,
    options: &ConversionOptions,
) -> f64 {
    let ratio = to.range() / from.range();
    let converted = (value - from.min_value) * ratio + to.min_value;

    let step = match to.scale_type() {
        ScaleType::Numeric if options.preserve_precision => source_step(from).unwrap_or(1.0),
        ScaleType::Numeric => to.step(),
        ScaleType::Custom if options.preserve_precision => source_step(from).unwrap_or(1.0),
        ScaleType::Custom | ScaleType::Letter | ScaleType::Competency => 1.0,
    };
    snap(converted, step, options.rounding_mode)
}

/// Position of `value` within the range of `system`, as 0-100
pub fn to_percentage(system: &NotationSystem, value: f64) -> f64 {
    (value - system.min_value) * 100.0 / system.range()
}

/// Encode a percentage in the native representation of `to`
pub fn encode(
    from: &NotationSystem,
    to: &NotationSystem,
    percentage: f64,
    options: &ConversionOptions,
) -> f64 {
    match &to.rules {
        ScaleRules::Numeric(_) | ScaleRules::Custom(_) => {
            let encoded = linear(to, percentage);
            let step = if options.preserve_precision {
                source_step(from)
            } else {
                to.precision()
            };
            match step {
                Some(step) => snap(encoded, step, options.rounding_mode),
                None => round_decimals(encoded, 2, options.rounding_mode),
            }
        }
        ScaleRules::Letter(rules) => encode_letter(to, rules, percentage, options),
        ScaleRules::Competency(rules) => encode_competency(to, rules, percentage),
    }
}

fn linear(to: &NotationSystem, percentage: f64) -> f64 {
    percentage / 100.0 * to.range() + to.min_value
}

/// Granularity a source value carries, if any
fn source_step(from: &NotationSystem) -> Option<f64> {
    match from.scale_type() {
        ScaleType::Numeric | ScaleType::Custom => from.precision(),
        ScaleType::Letter | ScaleType::Competency => Some(1.0),
    }
}

fn encode_letter(
    to: &NotationSystem,
    rules: &LetterRules,
    percentage: f64,
    options: &ConversionOptions,
) -> f64 {
    match &rules.letter_mappings {
        Some(mappings) if !mappings.is_empty() => {
            let mut sorted: Vec<_> = mappings.iter().collect();
            sorted.sort_by(|a, b| b.threshold.total_cmp(&a.threshold));
            sorted
                .iter()
                .find(|m| m.threshold <= percentage + PERCENT_EPSILON)
                .map(|m| m.value)
                .unwrap_or(to.min_value)
        }
        _ => snap(linear(to, percentage), 1.0, options.rounding_mode),
    }
}

fn encode_competency(to: &NotationSystem, rules: &CompetencyRules, percentage: f64) -> f64 {
    let at_least = |band: f64| percentage + PERCENT_EPSILON >= band;

    if at_least(EXPERT_BAND) {
        to.max_value
    } else if at_least(ACQUIRED_BAND) {
        rules.passing_level
    } else if at_least(IN_PROGRESS_BAND) {
        rules.passing_level - 1.0
    } else {
        to.min_value
    }
}
