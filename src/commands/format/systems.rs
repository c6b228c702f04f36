//! Notation system listing helpers

use super::record_number;
use gradescale_core::format::{escape_quotes, records_header};
use gradescale_core::system::NotationSystem;

/// Print systems in Human format
pub fn print_systems_human(systems: &[NotationSystem]) {
    if systems.is_empty() {
        println!("No notation systems registered");
        return;
    }

    for system in systems {
        println!(
            "{} [{}] {}-{}  {}",
            system.id,
            system.scale_type(),
            record_number(system.min_value),
            record_number(system.max_value),
            system.name
        );
    }
}

/// Print systems in Records format
pub fn print_systems_records(systems: &[NotationSystem]) {
    println!("{}", records_header("systems"));
    for system in systems {
        println!(
            "S id={} type={} min={} max={} name=\"{}\"",
            system.id,
            system.scale_type(),
            record_number(system.min_value),
            record_number(system.max_value),
            escape_quotes(&system.name)
        );
    }
}
