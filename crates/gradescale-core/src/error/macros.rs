//! Error macros for gradescale

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GradeError::invalid_value($context, $value))
    };
}

/// Macro for rejecting a broken system definition
#[macro_export]
macro_rules! bail_invalid_system {
    ($id:expr, $reason:expr) => {
        return Err($crate::error::GradeError::invalid_system($id, $reason))
    };
}
