//! Grade validation against a single system

use super::options::{is_multiple_of, snap, RoundingMode};
use super::types::GradeValidationResult;
use crate::system::{format_number, NotationSystem, ScaleBehavior, ScaleRules, VALUE_EPSILON};

/// Check `value` against the range and kind rules of `system`.
///
/// Every problem is reported as data; nothing here fails.
pub fn validate(
    system: &NotationSystem,
    behavior: &dyn ScaleBehavior,
    value: f64,
) -> GradeValidationResult {
    let mut result = GradeValidationResult::new(normalize(system, value));
    let show = |v: f64| format_number(v, "en");

    if !value.is_finite() {
        result.error("value must be a finite number");
        return result;
    }

    if !system.contains(value) {
        result.error(format!(
            "value {} is outside the allowed range [{}, {}]",
            show(value),
            show(system.min_value),
            show(system.max_value)
        ));
    }

    match &system.rules {
        ScaleRules::Numeric(rules) => {
            if let Some(precision) = rules.precision {
                check_precision(&mut result, value, precision);
            }
            if let Some(passing) = rules.passing_grade {
                if value < passing {
                    result.warning(format!(
                        "value {} is below the passing grade {}",
                        show(value),
                        show(passing)
                    ));
                }
            }
        }
        ScaleRules::Letter(_) | ScaleRules::Competency(_) => {
            if (value - value.round()).abs() > VALUE_EPSILON {
                result.error(format!("value {} must be an integer", show(value)));
            }
            let code = value.round();
            if system.label_for(code).is_none() {
                result.warning(format!("no label defined for value {}", show(code)));
            }
        }
        ScaleRules::Custom(rules) => {
            if let Some(precision) = rules.precision {
                check_precision(&mut result, value, precision);
            }
            if let Some(allowed) = &rules.allowed_values {
                if !allowed.iter().any(|a| (a - value).abs() < VALUE_EPSILON) {
                    result.error(format!(
                        "value {} is not one of the allowed values",
                        show(value)
                    ));
                }
            }
        }
    }

    if !behavior.validate_grade(system, value) {
        result.error(format!("value {} is rejected by {}", show(value), system.id));
    }

    result
}

fn check_precision(result: &mut GradeValidationResult, value: f64, precision: f64) {
    if !is_multiple_of(value, precision) {
        result.error(format!(
            "value {} must be a multiple of {}",
            format_number(value, "en"),
            precision
        ));
    }
}

/// Snap a raw value to the legal granularity of `system`
pub fn normalize(system: &NotationSystem, value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    match &system.rules {
        ScaleRules::Numeric(_) | ScaleRules::Custom(_) => {
            snap(value, system.step(), RoundingMode::Nearest)
        }
        ScaleRules::Letter(_) | ScaleRules::Competency(_) => value.round(),
    }
}
