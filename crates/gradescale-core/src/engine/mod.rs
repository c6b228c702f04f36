//! Grade conversion and validation engine
//!
//! The engine is built once from a snapshot of notation systems. Building
//! precomputes a converter for every ordered pair of distinct systems; every
//! later call is a pure lookup plus arithmetic. When the snapshot changes,
//! call [`ConversionEngine::rebuild`] (or build a new engine).

pub mod confidence;
pub mod convert;
pub mod matrix;
pub mod options;
pub mod preview;
pub mod types;
pub mod validate;

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, trace};

use crate::error::{GradeError, Result};
use crate::system::{DefaultBehavior, NotationSystem, ScaleBehavior};
use crate::trace_time;
use matrix::{ConverterMatrix, PairConverter};

pub use options::{ConversionOptions, RoundingMode};
pub use types::{ConversionPreview, ConversionResult, GradeValidationResult, PreviewExample};

/// Locale used for display labels when none is configured
pub const DEFAULT_LOCALE: &str = "en";

/// Converts and validates grades across a fixed set of notation systems
#[derive(Clone)]
pub struct ConversionEngine {
    matrix: ConverterMatrix,
    behavior: Arc<dyn ScaleBehavior>,
    locale: String,
}

impl std::fmt::Debug for ConversionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversionEngine")
            .field("systems", &self.matrix.systems().len())
            .field("locale", &self.locale)
            .finish()
    }
}

impl ConversionEngine {
    /// Build an engine using [`DefaultBehavior`] for display and acceptance
    pub fn new(systems: Vec<NotationSystem>) -> Self {
        Self::with_behavior(systems, Arc::new(DefaultBehavior))
    }

    /// Build an engine with registry-supplied display/acceptance behaviour
    pub fn with_behavior(systems: Vec<NotationSystem>, behavior: Arc<dyn ScaleBehavior>) -> Self {
        let start = Instant::now();
        let matrix = ConverterMatrix::build(systems);
        trace_time!(start, "engine_build", systems = matrix.systems().len());

        Self {
            matrix,
            behavior,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }

    /// Set the locale passed to the display formatter
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Replace the system snapshot and recompute every converter
    pub fn rebuild(&mut self, systems: Vec<NotationSystem>) {
        debug!(systems = systems.len(), "engine_rebuild");
        self.matrix = ConverterMatrix::build(systems);
    }

    pub fn systems(&self) -> &[NotationSystem] {
        self.matrix.systems()
    }

    pub fn system(&self, id: &str) -> Option<&NotationSystem> {
        self.matrix
            .index_of(id)
            .and_then(|index| self.matrix.system(index))
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Configured label for `value`, else the registry's display formatter
    pub fn display_label(&self, system: &NotationSystem, value: f64) -> String {
        match system.label_for(value) {
            Some(label) => label.to_string(),
            None => self.behavior.format_display(system, value, &self.locale),
        }
    }

    /// Resolve both ids and the converter between them
    fn pair(
        &self,
        from_id: &str,
        to_id: &str,
    ) -> Result<(&NotationSystem, &NotationSystem, PairConverter)> {
        let from_idx = self
            .matrix
            .index_of(from_id)
            .ok_or_else(|| GradeError::not_found(from_id))?;
        let to_idx = self
            .matrix
            .index_of(to_id)
            .ok_or_else(|| GradeError::not_found(to_id))?;

        self.matrix
            .get(from_idx, to_idx)
            .ok_or_else(|| GradeError::unsupported(from_id, to_id))
    }

    /// Convert `value` from one system into another.
    ///
    /// Fails with `SystemNotFound` for unknown ids and with
    /// `UnsupportedConversion` when `from_id == to_id`. A source value outside
    /// the source range is rejected unless
    /// `options.allow_partial_conversion` is set, in which case it is clamped.
    pub fn convert(
        &self,
        value: f64,
        from_id: &str,
        to_id: &str,
        options: &ConversionOptions,
    ) -> Result<ConversionResult> {
        let (from, to, converter) = self.pair(from_id, to_id)?;

        if !value.is_finite() {
            return Err(GradeError::invalid_value("grade value", value));
        }

        let source = if from.contains(value) {
            value
        } else if options.allow_partial_conversion {
            from.clamp(value)
        } else {
            return Err(GradeError::ValueOutOfRange {
                value,
                system: from.id.clone(),
                min: from.min_value,
                max: from.max_value,
            });
        };

        let converted = converter.kind.apply(from, to, source, options);
        trace!(
            from = from_id,
            to = to_id,
            value,
            converted,
            kind = ?converter.kind,
            "convert"
        );

        Ok(ConversionResult {
            value: converted,
            original_value: value,
            from_system: from.id.clone(),
            to_system: to.id.clone(),
            is_exact: converter.is_exact,
            confidence: converter.confidence,
        })
    }

    /// Convert every value in order. The first failure aborts the batch.
    pub fn convert_batch(
        &self,
        values: &[f64],
        from_id: &str,
        to_id: &str,
        options: &ConversionOptions,
    ) -> Result<Vec<ConversionResult>> {
        let start = Instant::now();
        let results = values
            .iter()
            .map(|&value| self.convert(value, from_id, to_id, options))
            .collect::<Result<Vec<_>>>()?;
        trace_time!(start, "convert_batch", count = results.len());
        Ok(results)
    }

    /// Check a raw value against a system. Never fails; unknown systems are
    /// reported inside the result.
    pub fn validate_grade(&self, value: f64, system_id: &str) -> GradeValidationResult {
        match self.system(system_id) {
            Some(system) => validate::validate(system, self.behavior.as_ref(), value),
            None => GradeValidationResult {
                is_valid: false,
                errors: vec![GradeError::not_found(system_id).to_string()],
                warnings: Vec::new(),
                normalized_value: value,
            },
        }
    }

    /// Representative conversions across the whole source range
    pub fn conversion_preview(&self, from_id: &str, to_id: &str) -> Result<ConversionPreview> {
        let (from, to, converter) = self.pair(from_id, to_id)?;
        let options = ConversionOptions::default();

        let examples = preview::sample_points(from.min_value, from.max_value)
            .into_iter()
            .map(|input| {
                let output = converter.kind.apply(from, to, input, &options);
                let label = self.display_label(to, output);
                PreviewExample {
                    input,
                    output,
                    label,
                }
            })
            .collect();

        Ok(ConversionPreview {
            from_system: from.id.clone(),
            to_system: to.id.clone(),
            examples,
            confidence: converter.confidence,
            is_exact: converter.is_exact,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::presets::{builtin_systems, COMPETENCY_4, FRENCH_20, PERCENT, US_LETTER};

    fn engine() -> ConversionEngine {
        ConversionEngine::new(builtin_systems())
    }

    #[test]
    fn test_convert_same_type() {
        let result = engine()
            .convert(15.5, FRENCH_20, PERCENT, &ConversionOptions::default())
            .unwrap();
        assert_eq!(result.value, 78.0);
        assert!(result.is_exact);
        assert_eq!(result.confidence, 0.95);
        assert_eq!(result.original_value, 15.5);
    }

    #[test]
    fn test_convert_unknown_system() {
        let err = engine()
            .convert(10.0, "nope", PERCENT, &ConversionOptions::default())
            .unwrap_err();
        assert!(matches!(err, GradeError::SystemNotFound { ref id } if id == "nope"));
    }

    #[test]
    fn test_convert_out_of_range_rejected_then_clamped() {
        let engine = engine();
        let err = engine
            .convert(25.0, FRENCH_20, PERCENT, &ConversionOptions::default())
            .unwrap_err();
        assert!(matches!(err, GradeError::ValueOutOfRange { .. }));

        let options = ConversionOptions {
            allow_partial_conversion: true,
            ..Default::default()
        };
        let result = engine.convert(25.0, FRENCH_20, PERCENT, &options).unwrap();
        assert_eq!(result.value, 100.0);
        assert_eq!(result.original_value, 25.0);
    }

    #[test]
    fn test_convert_rejects_nan() {
        let err = engine()
            .convert(f64::NAN, FRENCH_20, PERCENT, &ConversionOptions::default())
            .unwrap_err();
        assert!(matches!(err, GradeError::InvalidValue { .. }));
    }

    #[test]
    fn test_validate_unknown_system() {
        let result = engine().validate_grade(12.0, "nope");
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert!(result.warnings.is_empty());
        assert_eq!(result.normalized_value, 12.0);
    }

    #[test]
    fn test_preview_competency_labels() {
        let preview = engine().conversion_preview(PERCENT, COMPETENCY_4).unwrap();
        let labels: Vec<_> = preview.examples.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Non acquis",
                "Non acquis",
                "En cours d'acquisition",
                "Acquis",
                "Expert"
            ]
        );
        assert_eq!(preview.confidence, 0.8);
    }

    #[test]
    fn test_preview_uses_display_formatter_without_labels() {
        let engine = engine().with_locale("fr");
        let preview = engine.conversion_preview(US_LETTER, FRENCH_20).unwrap();
        assert_eq!(preview.examples.len(), 5);
        assert_eq!(preview.examples[0].label, "0/20");
        assert_eq!(preview.examples[4].label, "20/20");
    }

    #[test]
    fn test_rebuild_replaces_snapshot() {
        let mut engine = engine();
        let mut systems = builtin_systems();
        systems.retain(|s| s.id != PERCENT);
        engine.rebuild(systems);
        assert!(engine.system(PERCENT).is_none());
        let err = engine
            .convert(10.0, FRENCH_20, PERCENT, &ConversionOptions::default())
            .unwrap_err();
        assert!(matches!(err, GradeError::SystemNotFound { .. }));
    }
}
