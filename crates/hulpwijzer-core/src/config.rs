//! Application configuration model.
//!
//! Loaded from `config.toml` by the infrastructure layer. Every field has a
//! default so a missing file or a partial file is always usable.

use serde::{Deserialize, Serialize};

/// Default durable storage key for the session identifier.
pub const DEFAULT_SESSION_KEY: &str = "hulpwijzer_session_id";

/// Default name of the key/value storage file.
pub const DEFAULT_STORAGE_FILE: &str = "storage.toml";

/// Default tag prepended to generated session identifiers.
pub const DEFAULT_ID_PREFIX: &str = "sess";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Where the session identifier lives on disk.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    #[serde(default = "default_session_key")]
    pub session_key: String,
    #[serde(default = "default_storage_file")]
    pub file_name: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            session_key: default_session_key(),
            file_name: default_storage_file(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            id_prefix: default_id_prefix(),
        }
    }
}

fn default_session_key() -> String {
    DEFAULT_SESSION_KEY.to_string()
}

fn default_storage_file() -> String {
    DEFAULT_STORAGE_FILE.to_string()
}

fn default_id_prefix() -> String {
    DEFAULT_ID_PREFIX.to_string()
}
