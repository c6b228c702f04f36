//! CLI commands for gradescale

pub mod convert;
pub mod dispatch;
pub mod format;
pub mod preview;
pub mod systems;
pub mod validate;
