//! Preview output formatting helpers

use super::{record_number, yes_no};
use gradescale_core::engine::{ConversionEngine, ConversionPreview};
use gradescale_core::format::{escape_quotes, records_header};
use gradescale_core::system::format_number;

/// Print a preview in Human format
pub fn print_preview_human(engine: &ConversionEngine, preview: &ConversionPreview) {
    let locale = engine.locale();

    println!("{} -> {}", preview.from_system, preview.to_system);
    println!(
        "confidence: {:.2}, exact: {}",
        preview.confidence,
        yes_no(preview.is_exact)
    );
    println!();

    for example in &preview.examples {
        println!(
            "  {:>8} -> {:>8}  {}",
            format_number(example.input, locale),
            format_number(example.output, locale),
            example.label
        );
    }
}

/// Print a preview in Records format
pub fn print_preview_records(preview: &ConversionPreview) {
    println!("{}", records_header("preview"));
    println!(
        "O from={} to={} exact={} confidence={}",
        preview.from_system, preview.to_system, preview.is_exact, preview.confidence
    );
    for example in &preview.examples {
        println!(
            "P input={} output={} label=\"{}\"",
            record_number(example.input),
            record_number(example.output),
            escape_quotes(&example.label)
        );
    }
}
