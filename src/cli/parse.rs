use gradescale_core::engine::RoundingMode;
use gradescale_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse rounding mode from string
pub fn parse_rounding_mode(s: &str) -> std::result::Result<RoundingMode, String> {
    s.parse::<RoundingMode>().map_err(|e| e.to_string())
}
