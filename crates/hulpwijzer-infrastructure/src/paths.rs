//! Path management for Hulpwijzer files.
//!
//! ```text
//! ~/.config/hulpwijzer/        # Base directory (or $HULPWIJZER_HOME)
//! ├── config.toml              # Application configuration
//! └── storage.toml             # Durable key/value storage (session id)
//! ```

use std::path::{Path, PathBuf};

/// Environment variable overriding the base directory.
pub const HOME_ENV: &str = "HULPWIJZER_HOME";

const APP_DIR: &str = "hulpwijzer";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// No platform config directory could be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

#[derive(Debug, Clone)]
pub struct HulpwijzerPaths {
    base_dir: PathBuf,
}

impl HulpwijzerPaths {
    /// Resolves the base directory.
    ///
    /// Precedence: explicit override, then `$HULPWIJZER_HOME`, then the
    /// platform config directory joined with `hulpwijzer`.
    pub fn new(base_override: Option<PathBuf>) -> Result<Self, PathError> {
        let base_dir = match base_override {
            Some(dir) => dir,
            None => match std::env::var_os(HOME_ENV) {
                Some(dir) if !dir.is_empty() => PathBuf::from(dir),
                _ => dirs::config_dir()
                    .ok_or(PathError::ConfigDirNotFound)?
                    .join(APP_DIR),
            },
        };
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.base_dir.join("config.toml")
    }

    pub fn storage_file(&self, file_name: &str) -> PathBuf {
        self.base_dir.join(file_name)
    }
}
