//! Output formatting helpers for gradescale commands

mod conversion;
mod preview;
mod systems;
mod validation;

pub use conversion::{print_conversions_human, print_conversions_json, print_conversions_records};
pub use preview::{print_preview_human, print_preview_records};
pub use systems::{print_systems_human, print_systems_records};
pub use validation::{print_validation_human, print_validation_json, print_validation_records};

use gradescale_core::system::format_number;

/// Numbers in records output are locale-independent
pub(crate) fn record_number(value: f64) -> String {
    format_number(value, "en")
}

pub(crate) fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
