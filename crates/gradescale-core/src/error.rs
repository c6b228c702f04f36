//! Error types and exit codes for gradescale
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure, or `validate` reporting an invalid grade
//! - 2: Usage error (bad flags/args, out-of-range source value)
//! - 3: Data/registry error (unknown system, unsupported pair, bad definition)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the gradescale CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/registry error - unknown system, bad definition (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during conversion, validation and registry loading.
///
/// Validation problems for a single grade are never reported through this
/// type; they are returned as data in
/// [`GradeValidationResult`](crate::engine::GradeValidationResult).
#[derive(Error, Debug)]
pub enum GradeError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("value {value} is outside the range of {system} [{min}, {max}]")]
    ValueOutOfRange {
        value: f64,
        system: String,
        min: f64,
        max: f64,
    },

    // Data/registry errors (exit code 3)
    #[error("notation system not found: {id}")]
    SystemNotFound { id: String },

    #[error("conversion not supported: {from} -> {to}")]
    UnsupportedConversion { from: String, to: String },

    #[error("invalid notation system {id}: {reason}")]
    InvalidSystem { id: String, reason: String },

    #[error("duplicate notation system id: {id}")]
    DuplicateSystem { id: String },

    #[error("config file not found: {path:?}")]
    ConfigNotFound { path: PathBuf },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GradeError {
    /// Create an error for a notation system id absent from the registry snapshot
    pub fn not_found(id: impl Into<String>) -> Self {
        GradeError::SystemNotFound { id: id.into() }
    }

    /// Create an error for a pair with no converter
    pub fn unsupported(from: impl Into<String>, to: impl Into<String>) -> Self {
        GradeError::UnsupportedConversion {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create an error for an invalid value or argument
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GradeError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a structurally broken system definition
    pub fn invalid_system(id: &str, reason: impl Into<String>) -> Self {
        GradeError::InvalidSystem {
            id: id.to_string(),
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            GradeError::UnknownFormat(_)
            | GradeError::UsageError(_)
            | GradeError::InvalidValue { .. }
            | GradeError::ValueOutOfRange { .. } => ExitCode::Usage,

            // Data/registry errors
            GradeError::SystemNotFound { .. }
            | GradeError::UnsupportedConversion { .. }
            | GradeError::InvalidSystem { .. }
            | GradeError::DuplicateSystem { .. }
            | GradeError::ConfigNotFound { .. } => ExitCode::Data,

            // Generic failures
            GradeError::Io(_)
            | GradeError::Yaml(_)
            | GradeError::Json(_)
            | GradeError::Toml(_)
            | GradeError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GradeError::UnknownFormat(_) => "unknown_format",
            GradeError::UsageError(_) => "usage_error",
            GradeError::InvalidValue { .. } => "invalid_value",
            GradeError::ValueOutOfRange { .. } => "value_out_of_range",
            GradeError::SystemNotFound { .. } => "system_not_found",
            GradeError::UnsupportedConversion { .. } => "unsupported_conversion",
            GradeError::InvalidSystem { .. } => "invalid_system",
            GradeError::DuplicateSystem { .. } => "duplicate_system",
            GradeError::ConfigNotFound { .. } => "config_not_found",
            GradeError::Io(_) => "io_error",
            GradeError::Yaml(_) => "yaml_error",
            GradeError::Json(_) => "json_error",
            GradeError::Toml(_) => "toml_error",
            GradeError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for gradescale operations
pub type Result<T> = std::result::Result<T, GradeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(GradeError::not_found("x").exit_code(), ExitCode::Data);
        assert_eq!(GradeError::unsupported("a", "a").exit_code(), ExitCode::Data);
        assert_eq!(
            GradeError::invalid_value("rounding mode", "up").exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            GradeError::Other("boom".to_string()).exit_code(),
            ExitCode::Failure
        );
        assert_eq!(i32::from(ExitCode::Data), 3);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            GradeError::not_found("fr-20").to_string(),
            "notation system not found: fr-20"
        );
        assert_eq!(
            GradeError::unsupported("fr-20", "fr-20").to_string(),
            "conversion not supported: fr-20 -> fr-20"
        );
        let err = GradeError::ValueOutOfRange {
            value: 25.0,
            system: "fr-20".to_string(),
            min: 0.0,
            max: 20.0,
        };
        assert_eq!(
            err.to_string(),
            "value 25 is outside the range of fr-20 [0, 20]"
        );
    }

    #[test]
    fn test_to_json_envelope() {
        let json = GradeError::not_found("nope").to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "system_not_found");
        assert_eq!(json["error"]["message"], "notation system not found: nope");
    }
}
