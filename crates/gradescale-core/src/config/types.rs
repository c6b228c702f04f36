//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::engine::ConversionOptions;
use crate::system::NotationSystem;

/// Current config format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Registry configuration: which notation systems exist and how to convert by default
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Config format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Locale for display labels (optional; defaults to "en")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Register the built-in systems before the ones listed here
    #[serde(default = "default_include_presets")]
    pub include_presets: bool,

    /// Default conversion options; CLI flags override them
    #[serde(default)]
    pub defaults: ConversionOptions,

    /// School-defined systems. An entry reusing a built-in id replaces it.
    #[serde(default)]
    pub systems: Vec<NotationSystem>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_FORMAT_VERSION,
            locale: None,
            include_presets: default_include_presets(),
            defaults: ConversionOptions::default(),
            systems: Vec::new(),
        }
    }
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_include_presets() -> bool {
    true
}
