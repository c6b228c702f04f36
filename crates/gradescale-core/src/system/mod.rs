//! Notation system definitions
//!
//! A notation system is a named grading scale: a kind, a numeric range and
//! kind-specific rules. Letters and competency levels are numeric codes with
//! display labels.

pub mod behavior;
pub mod presets;
pub mod types;

pub(crate) use types::VALUE_EPSILON;

pub use behavior::{format_number, DefaultBehavior, ScaleBehavior};
pub use types::{
    CompetencyRules, LetterMapping, LetterRules, NotationSystem, NumericRules, ScaleLabel,
    ScaleRules, ScaleType,
};
