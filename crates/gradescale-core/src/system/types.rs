//! Notation system type definitions

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tolerance used when comparing grade values for equality
pub(crate) const VALUE_EPSILON: f64 = 1e-9;

/// The kind of a grading scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleType {
    Numeric,
    Letter,
    Competency,
    Custom,
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleType::Numeric => write!(f, "numeric"),
            ScaleType::Letter => write!(f, "letter"),
            ScaleType::Competency => write!(f, "competency"),
            ScaleType::Custom => write!(f, "custom"),
        }
    }
}

/// A numeric code paired with its display label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleLabel {
    pub value: f64,
    pub label: String,
}

impl ScaleLabel {
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// One row of a letter threshold table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetterMapping {
    /// Display letter, e.g. "B+"
    pub letter: String,
    /// Minimum percentage (0-100) required for this letter
    pub threshold: f64,
    /// Numeric code stored for this letter
    pub value: f64,
}

impl LetterMapping {
    pub fn new(letter: impl Into<String>, threshold: f64, value: f64) -> Self {
        Self {
            letter: letter.into(),
            threshold,
            value,
        }
    }
}

/// Rules shared by numeric and custom scales
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumericRules {
    /// Smallest legal increment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<f64>,

    /// Values below this are legal but flagged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passing_grade: Option<f64>,

    /// Explicit discrete set of legal values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<f64>>,
}

/// Rules for letter scales
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LetterRules {
    /// Threshold table; when absent, conversions fall back to linear scaling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_mappings: Option<Vec<LetterMapping>>,

    #[serde(default)]
    pub grade_labels: Vec<ScaleLabel>,
}

/// Rules for competency scales
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetencyRules {
    /// Level from which a competency counts as acquired
    pub passing_level: f64,

    #[serde(default)]
    pub competency_levels: Vec<ScaleLabel>,
}

/// Kind-specific configuration of a notation system.
///
/// The variant is the scale kind, so kind and rules can never disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "scale_type", rename_all = "lowercase")]
pub enum ScaleRules {
    Numeric(NumericRules),
    Letter(LetterRules),
    Competency(CompetencyRules),
    Custom(NumericRules),
}

impl ScaleRules {
    pub fn scale_type(&self) -> ScaleType {
        match self {
            ScaleRules::Numeric(_) => ScaleType::Numeric,
            ScaleRules::Letter(_) => ScaleType::Letter,
            ScaleRules::Competency(_) => ScaleType::Competency,
            ScaleRules::Custom(_) => ScaleType::Custom,
        }
    }
}

/// Immutable definition of one grading scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotationSystem {
    pub id: String,

    #[serde(default)]
    pub name: String,

    pub min_value: f64,
    pub max_value: f64,

    /// Display suffix such as "/20" or "%"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,

    pub rules: ScaleRules,
}

impl NotationSystem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        min_value: f64,
        max_value: f64,
        rules: ScaleRules,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            min_value,
            max_value,
            suffix: None,
            rules,
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn scale_type(&self) -> ScaleType {
        self.rules.scale_type()
    }

    /// Width of the legal range (`max - min`)
    pub fn range(&self) -> f64 {
        self.max_value - self.min_value
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min_value && value <= self.max_value
    }

    /// Clamp a value into `[min, max]`
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min_value).min(self.max_value)
    }

    /// Configured precision for numeric and custom scales
    pub fn precision(&self) -> Option<f64> {
        match &self.rules {
            ScaleRules::Numeric(rules) | ScaleRules::Custom(rules) => rules.precision,
            ScaleRules::Letter(_) | ScaleRules::Competency(_) => None,
        }
    }

    /// Granularity of legal values: configured precision, else 1
    pub fn step(&self) -> f64 {
        self.precision().unwrap_or(1.0)
    }

    /// Label table for discrete scales (`grade_labels` / `competency_levels`)
    pub fn labels(&self) -> &[ScaleLabel] {
        match &self.rules {
            ScaleRules::Letter(rules) => &rules.grade_labels,
            ScaleRules::Competency(rules) => &rules.competency_levels,
            ScaleRules::Numeric(_) | ScaleRules::Custom(_) => &[],
        }
    }

    /// Look up the label configured for a value
    pub fn label_for(&self, value: f64) -> Option<&str> {
        self.labels()
            .iter()
            .find(|l| (l.value - value).abs() < VALUE_EPSILON)
            .map(|l| l.label.as_str())
    }

    /// Letter whose mapping stores this numeric code
    pub fn letter_for(&self, value: f64) -> Option<&str> {
        match &self.rules {
            ScaleRules::Letter(LetterRules {
                letter_mappings: Some(mappings),
                ..
            }) => mappings
                .iter()
                .find(|m| (m.value - value).abs() < VALUE_EPSILON)
                .map(|m| m.letter.as_str()),
            _ => None,
        }
    }
}
