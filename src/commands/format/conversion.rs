//! Conversion output formatting helpers

use super::{record_number, yes_no};
use gradescale_core::engine::{ConversionEngine, ConversionResult};
use gradescale_core::error::Result;
use gradescale_core::format::{escape_quotes, records_header};
use gradescale_core::system::format_number;

/// Print conversions in JSON format
pub fn print_conversions_json(results: &[ConversionResult]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(results)?);
    Ok(())
}

fn label(engine: &ConversionEngine, result: &ConversionResult) -> String {
    match engine.system(&result.to_system) {
        Some(system) => engine.display_label(system, result.value),
        None => record_number(result.value),
    }
}

/// Print conversions in Human format
pub fn print_conversions_human(engine: &ConversionEngine, results: &[ConversionResult]) {
    let locale = engine.locale();

    for result in results {
        println!(
            "{} {} -> {} {} ({})",
            format_number(result.original_value, locale),
            result.from_system,
            format_number(result.value, locale),
            result.to_system,
            label(engine, result)
        );
    }

    // Quality figures depend only on the pair, so one line covers the batch
    if let Some(first) = results.first() {
        println!(
            "confidence: {:.2}, exact: {}",
            first.confidence,
            yes_no(first.is_exact)
        );
    }
}

/// Print conversions in Records format
pub fn print_conversions_records(
    engine: &ConversionEngine,
    mode: &str,
    results: &[ConversionResult],
) {
    println!("{}", records_header(mode));

    for result in results {
        println!(
            "C from={} to={} input={} output={} label=\"{}\" exact={} confidence={}",
            result.from_system,
            result.to_system,
            record_number(result.original_value),
            record_number(result.value),
            escape_quotes(&label(engine, result)),
            result.is_exact,
            result.confidence
        );
    }
}
