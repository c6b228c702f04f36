//! Snapshot of registered notation systems
//!
//! The registry assembles the system list (built-in presets plus configured
//! systems), rejects structurally broken definitions and hands the snapshot
//! to a [`ConversionEngine`]. The engine itself never re-checks these
//! preconditions.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::bail_invalid_system;
use crate::config::RegistryConfig;
use crate::engine::ConversionEngine;
use crate::error::{GradeError, Result};
use crate::system::presets::builtin_systems;
use crate::system::{NotationSystem, ScaleRules};

/// Ordered, validated list of notation systems
#[derive(Debug, Clone, Default)]
pub struct SystemRegistry {
    systems: Vec<NotationSystem>,
}

impl SystemRegistry {
    /// Registry holding only the built-in systems
    pub fn builtin() -> Self {
        Self {
            systems: builtin_systems(),
        }
    }

    /// Check and register an explicit list of systems
    pub fn from_systems(systems: Vec<NotationSystem>) -> Result<Self> {
        let mut seen = HashSet::new();
        for system in &systems {
            check_system(system)?;
            if !seen.insert(system.id.as_str()) {
                return Err(GradeError::DuplicateSystem {
                    id: system.id.clone(),
                });
            }
            if let ScaleRules::Letter(rules) = &system.rules {
                if rules.letter_mappings.as_ref().is_none_or(|m| m.is_empty()) {
                    warn!(id = %system.id, "letter system without thresholds, using linear scaling");
                }
            }
        }
        if systems.len() < 2 {
            warn!(
                count = systems.len(),
                "fewer than two notation systems, no conversion is possible"
            );
        }
        Ok(Self { systems })
    }

    /// Presets (unless disabled) followed by configured systems.
    ///
    /// A configured system reusing a preset id replaces the preset in place.
    pub fn from_config(config: &RegistryConfig) -> Result<Self> {
        let mut systems = if config.include_presets {
            builtin_systems()
        } else {
            Vec::new()
        };
        let presets = systems.len();

        let mut configured = HashSet::new();
        for system in &config.systems {
            if !configured.insert(system.id.as_str()) {
                return Err(GradeError::DuplicateSystem {
                    id: system.id.clone(),
                });
            }

            match systems[..presets].iter().position(|s| s.id == system.id) {
                Some(index) => {
                    debug!(id = %system.id, "configured system overrides preset");
                    systems[index] = system.clone();
                }
                None => systems.push(system.clone()),
            }
        }

        Self::from_systems(systems)
    }

    pub fn systems(&self) -> &[NotationSystem] {
        &self.systems
    }

    /// Build an engine over the current snapshot
    pub fn engine(&self) -> ConversionEngine {
        ConversionEngine::new(self.systems.clone())
    }
}

/// Structural preconditions the engine relies on
fn check_system(system: &NotationSystem) -> Result<()> {
    let id = system.id.as_str();

    if id.trim().is_empty() {
        bail_invalid_system!(id, "id must not be empty");
    }
    if !system.min_value.is_finite() || !system.max_value.is_finite() {
        bail_invalid_system!(id, "range bounds must be finite");
    }
    if system.min_value >= system.max_value {
        bail_invalid_system!(
            id,
            format!(
                "min_value ({}) must be below max_value ({})",
                system.min_value, system.max_value
            )
        );
    }

    match &system.rules {
        ScaleRules::Numeric(rules) | ScaleRules::Custom(rules) => {
            if let Some(precision) = rules.precision {
                if !(precision > 0.0 && precision.is_finite()) {
                    bail_invalid_system!(
                        id,
                        format!("precision must be positive, got {}", precision)
                    );
                }
            }
            if let Some(allowed) = &rules.allowed_values {
                if let Some(outside) = allowed.iter().find(|v| !system.contains(**v)) {
                    bail_invalid_system!(
                        id,
                        format!("allowed value {} is outside the range", outside)
                    );
                }
            }
        }
        ScaleRules::Letter(rules) => {
            for mapping in rules.letter_mappings.iter().flatten() {
                if !(0.0..=100.0).contains(&mapping.threshold) {
                    bail_invalid_system!(
                        id,
                        format!("threshold for {} must be within 0-100", mapping.letter)
                    );
                }
                if !system.contains(mapping.value) {
                    bail_invalid_system!(
                        id,
                        format!("value for {} is outside the range", mapping.letter)
                    );
                }
            }
        }
        ScaleRules::Competency(rules) => {
            if !system.contains(rules.passing_level) {
                bail_invalid_system!(id, "passing_level is outside the range");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::presets::{FRENCH_20, PERCENT};
    use crate::system::{CompetencyRules, NumericRules};

    fn numeric(id: &str, min: f64, max: f64) -> NotationSystem {
        NotationSystem::new(id, id, min, max, ScaleRules::Numeric(NumericRules::default()))
    }

    #[test]
    fn test_builtin_registry() {
        let registry = SystemRegistry::builtin();
        assert_eq!(registry.systems().len(), 4);
        assert!(registry.systems().iter().any(|s| s.id == FRENCH_20));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = SystemRegistry::from_systems(vec![numeric("bad", 20.0, 0.0)]).unwrap_err();
        assert!(matches!(err, GradeError::InvalidSystem { ref id, .. } if id == "bad"));
    }

    #[test]
    fn test_equal_bounds_rejected() {
        assert!(SystemRegistry::from_systems(vec![numeric("flat", 5.0, 5.0)]).is_err());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = SystemRegistry::from_systems(vec![
            numeric("dup", 0.0, 10.0),
            numeric("dup", 0.0, 20.0),
        ])
        .unwrap_err();
        assert!(matches!(err, GradeError::DuplicateSystem { .. }));
    }

    #[test]
    fn test_zero_precision_rejected() {
        let system = NotationSystem::new(
            "zero",
            "Zero",
            0.0,
            10.0,
            ScaleRules::Custom(NumericRules {
                precision: Some(0.0),
                ..Default::default()
            }),
        );
        assert!(SystemRegistry::from_systems(vec![system]).is_err());
    }

    #[test]
    fn test_passing_level_outside_range_rejected() {
        let system = NotationSystem::new(
            "comp",
            "Comp",
            1.0,
            4.0,
            ScaleRules::Competency(CompetencyRules {
                passing_level: 5.0,
                competency_levels: Vec::new(),
            }),
        );
        assert!(SystemRegistry::from_systems(vec![system]).is_err());
    }

    #[test]
    fn test_config_override_replaces_preset_in_place() {
        let config = RegistryConfig {
            systems: vec![numeric(PERCENT, 0.0, 1000.0), numeric("extra", 0.0, 5.0)],
            ..Default::default()
        };
        let registry = SystemRegistry::from_config(&config).unwrap();
        assert_eq!(registry.systems().len(), 5);
        assert_eq!(registry.systems()[1].id, PERCENT);
        assert_eq!(registry.systems()[1].max_value, 1000.0);
        assert_eq!(registry.systems()[4].id, "extra");
    }

    #[test]
    fn test_config_without_presets() {
        let config = RegistryConfig {
            include_presets: false,
            systems: vec![numeric("only", 0.0, 5.0)],
            ..Default::default()
        };
        let registry = SystemRegistry::from_config(&config).unwrap();
        assert_eq!(registry.systems().len(), 1);
    }

    #[test]
    fn test_config_duplicate_rejected() {
        let config = RegistryConfig {
            systems: vec![numeric("x", 0.0, 5.0), numeric("x", 0.0, 6.0)],
            ..Default::default()
        };
        assert!(matches!(
            SystemRegistry::from_config(&config),
            Err(GradeError::DuplicateSystem { .. })
        ));
    }
}
