//! Validation output formatting helpers

use super::record_number;
use crate::cli::ValidateArgs;
use gradescale_core::engine::{ConversionEngine, GradeValidationResult};
use gradescale_core::error::Result;
use gradescale_core::format::{escape_quotes, records_header};
use gradescale_core::system::format_number;

/// Print a validation outcome in JSON format
pub fn print_validation_json(args: &ValidateArgs, result: &GradeValidationResult) -> Result<()> {
    let output = serde_json::json!({
        "value": args.value,
        "system": args.system,
        "is_valid": result.is_valid,
        "errors": result.errors,
        "warnings": result.warnings,
        "normalized_value": result.normalized_value,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Print a validation outcome in Human format
pub fn print_validation_human(
    engine: &ConversionEngine,
    args: &ValidateArgs,
    result: &GradeValidationResult,
) {
    let locale = engine.locale();
    let verdict = if result.is_valid { "valid" } else { "invalid" };
    println!(
        "{} is {} in {}",
        format_number(args.value, locale),
        verdict,
        args.system
    );

    for error in &result.errors {
        println!("  error: {}", error);
    }
    for warning in &result.warnings {
        println!("  warning: {}", warning);
    }

    if !result.is_valid && result.normalized_value != args.value {
        println!(
            "  suggestion: {}",
            format_number(result.normalized_value, locale)
        );
    }
}

/// Print a validation outcome in Records format
pub fn print_validation_records(args: &ValidateArgs, result: &GradeValidationResult) {
    println!("{}", records_header("validate"));
    println!(
        "V system={} value={} valid={} normalized={}",
        args.system,
        record_number(args.value),
        result.is_valid,
        record_number(result.normalized_value)
    );
    for error in &result.errors {
        println!("E error \"{}\"", escape_quotes(error));
    }
    for warning in &result.warnings {
        println!("E warning \"{}\"", escape_quotes(warning));
    }
}
