//! Configuration loading.

use std::path::PathBuf;

use hulpwijzer_core::config::AppConfig;
use hulpwijzer_core::error::{HulpwijzerError, Result};

use crate::paths::HulpwijzerPaths;

/// Reads `config.toml`, falling back to defaults when the file is absent.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(paths: &HulpwijzerPaths) -> Self {
        Self::with_path(paths.config_file())
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the configuration.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error when the file exists but cannot be read or
    /// parsed. A broken config is a startup problem, not something to paper
    /// over with defaults.
    pub fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            tracing::debug!(path = ?self.path, "No config file, using defaults");
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            HulpwijzerError::config(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        toml::from_str(&content).map_err(|e| {
            HulpwijzerError::config(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }
}
