//! Registry configuration for gradescale
//!
//! Configuration is read from a TOML file (or YAML, by extension). Lookup
//! order: explicit path (`--config` / `GRADESCALE_CONFIG`), then
//! `<config dir>/gradescale/systems.toml` if present, then built-in defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{GradeError, Result};

pub use types::{RegistryConfig, CONFIG_FORMAT_VERSION};

const CONFIG_DIR: &str = "gradescale";
const CONFIG_FILE: &str = "systems.toml";
const CONFIG_DIR_ENV_VAR: &str = "GRADESCALE_CONFIG_DIR";

/// Serialization format of a config file, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Yaml,
}

impl ConfigFormat {
    fn for_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => ConfigFormat::Yaml,
            _ => ConfigFormat::Toml,
        }
    }
}

impl RegistryConfig {
    /// Default config location, honouring `GRADESCALE_CONFIG_DIR`
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    GradeError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the config the CLI should use.
    ///
    /// An explicit path must exist; the default location is optional.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(GradeError::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            return Self::load(path);
        }

        match Self::default_path() {
            Ok(path) if path.exists() => Self::load(&path),
            Ok(path) => {
                debug!(path = %path.display(), "no config file, using presets");
                Ok(Self::default())
            }
            Err(e) => {
                debug!(error = %e, "config directory unavailable, using presets");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: RegistryConfig = match ConfigFormat::for_path(path) {
            ConfigFormat::Toml => toml::from_str(&content)?,
            ConfigFormat::Yaml => serde_yaml::from_str(&content)?,
        };

        if config.version > CONFIG_FORMAT_VERSION {
            crate::bail_invalid!("config version", config.version);
        }

        debug!(
            path = %path.display(),
            systems = config.systems.len(),
            "load_config"
        );
        Ok(config)
    }
}
