//! Built-in notation systems

use super::types::{
    CompetencyRules, LetterMapping, LetterRules, NotationSystem, NumericRules, ScaleLabel,
    ScaleRules,
};

/// French-style 0-20 scale with half-point precision
pub const FRENCH_20: &str = "fr-20";
/// 0-100 percentage scale
pub const PERCENT: &str = "percent";
/// A-F letters encoded 4 to 0
pub const US_LETTER: &str = "us-letter";
/// Four-level competency scale
pub const COMPETENCY_4: &str = "competency-4";

/// All built-in systems, in registration order
pub fn builtin_systems() -> Vec<NotationSystem> {
    vec![french_20(), percent(), us_letter(), competency_4()]
}

fn french_20() -> NotationSystem {
    NotationSystem::new(
        FRENCH_20,
        "Note sur 20",
        0.0,
        20.0,
        ScaleRules::Numeric(NumericRules {
            precision: Some(0.5),
            passing_grade: Some(10.0),
            allowed_values: None,
        }),
    )
    .with_suffix("/20")
}

fn percent() -> NotationSystem {
    NotationSystem::new(
        PERCENT,
        "Pourcentage",
        0.0,
        100.0,
        ScaleRules::Numeric(NumericRules {
            precision: Some(1.0),
            passing_grade: Some(50.0),
            allowed_values: None,
        }),
    )
    .with_suffix("%")
}

fn us_letter() -> NotationSystem {
    let mappings = vec![
        LetterMapping::new("A", 90.0, 4.0),
        LetterMapping::new("B", 80.0, 3.0),
        LetterMapping::new("C", 70.0, 2.0),
        LetterMapping::new("D", 60.0, 1.0),
        LetterMapping::new("F", 0.0, 0.0),
    ];
    let grade_labels = mappings
        .iter()
        .map(|m| ScaleLabel::new(m.value, m.letter.clone()))
        .collect();

    NotationSystem::new(
        US_LETTER,
        "Lettres A-F",
        0.0,
        4.0,
        ScaleRules::Letter(LetterRules {
            letter_mappings: Some(mappings),
            grade_labels,
        }),
    )
}

fn competency_4() -> NotationSystem {
    NotationSystem::new(
        COMPETENCY_4,
        "Compétences (4 niveaux)",
        1.0,
        4.0,
        ScaleRules::Competency(CompetencyRules {
            passing_level: 3.0,
            competency_levels: vec![
                ScaleLabel::new(1.0, "Non acquis"),
                ScaleLabel::new(2.0, "En cours d'acquisition"),
                ScaleLabel::new(3.0, "Acquis"),
                ScaleLabel::new(4.0, "Expert"),
            ],
        }),
    )
}
