//! Display and acceptance hooks supplied by the registry
//!
//! The engine treats these as black boxes: it calls `format_display` to label
//! preview samples and `validate_grade` as the last step of validation.

use super::types::{NotationSystem, ScaleRules};

/// Registry-side behaviour attached to notation systems
pub trait ScaleBehavior: Send + Sync {
    /// Render a value of `system` for display in `locale`
    fn format_display(&self, system: &NotationSystem, value: f64, locale: &str) -> String;

    /// Registry-level acceptance predicate for a raw value
    fn validate_grade(&self, system: &NotationSystem, value: f64) -> bool;
}

/// Behaviour used when the registry supplies nothing more specific
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultBehavior;

impl ScaleBehavior for DefaultBehavior {
    fn format_display(&self, system: &NotationSystem, value: f64, locale: &str) -> String {
        match &system.rules {
            ScaleRules::Letter(_) | ScaleRules::Competency(_) => {
                let code = value.round();
                system
                    .label_for(code)
                    .or_else(|| system.letter_for(code))
                    .map(str::to_string)
                    .unwrap_or_else(|| format_number(value, locale))
            }
            ScaleRules::Numeric(_) | ScaleRules::Custom(_) => {
                let number = format_number(value, locale);
                match &system.suffix {
                    Some(suffix) => format!("{}{}", number, suffix),
                    None => number,
                }
            }
        }
    }

    /// Accepts any finite value; range and kind rules are checked by the engine
    fn validate_grade(&self, _system: &NotationSystem, value: f64) -> bool {
        value.is_finite()
    }
}

/// Locales written with a decimal comma
const DECIMAL_COMMA_LOCALES: &[&str] = &["fr", "de", "es", "it", "pt", "nl"];

/// Format a number with at most two decimals, trailing zeros trimmed
pub fn format_number(value: f64, locale: &str) -> String {
    let mut text = format!("{:.2}", value);
    if text.contains('.') {
        text = text.trim_end_matches('0').trim_end_matches('.').to_string();
    }
    if text == "-0" {
        text = "0".to_string();
    }

    let language = locale
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    if DECIMAL_COMMA_LOCALES.contains(&language.as_str()) {
        text.replace('.', ",")
    } else {
        text
    }
}
