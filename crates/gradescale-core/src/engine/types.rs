//! Value objects returned by the engine

use serde::{Deserialize, Serialize};

/// Outcome of converting one value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Converted value, in the target system's encoding
    pub value: f64,
    pub original_value: f64,
    pub from_system: String,
    pub to_system: String,
    /// No resolution can be lost for this pair
    pub is_exact: bool,
    /// Heuristic reliability in [0, 1]
    pub confidence: f64,
}

/// Outcome of checking a raw value against a system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Value snapped to the system's granularity, offered as auto-correction
    pub normalized_value: f64,
}

impl GradeValidationResult {
    pub(crate) fn new(normalized_value: f64) -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            normalized_value,
        }
    }

    pub(crate) fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.is_valid = false;
    }

    pub(crate) fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }
}

/// One sample row of a conversion preview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewExample {
    pub input: f64,
    pub output: f64,
    pub label: String,
}

/// Representative conversions for a pair of systems
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionPreview {
    pub from_system: String,
    pub to_system: String,
    pub examples: Vec<PreviewExample>,
    pub confidence: f64,
    pub is_exact: bool,
}
