//! Gradescale Core Library
//!
//! Conversion and validation of grades across notation systems (0-20
//! numeric, letters, competency levels, school-defined custom scales).

pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod logging;
pub mod registry;
pub mod system;
