//! Storage and configuration adapters for Hulpwijzer.

pub mod config_service;
pub mod paths;
pub mod session_id_repository;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::paths::HulpwijzerPaths;
pub use crate::session_id_repository::{FileSessionIdRepository, InMemorySessionIdRepository};
pub use crate::storage::KeyValueFile;

use std::sync::Arc;

use hulpwijzer_core::config::AppConfig;
use hulpwijzer_core::session::SessionIdentityStore;

/// Builds the file-backed identity store described by `config`.
pub fn file_identity_store(paths: &HulpwijzerPaths, config: &AppConfig) -> SessionIdentityStore {
    let file = KeyValueFile::new(paths.storage_file(&config.storage.file_name));
    let repository = FileSessionIdRepository::new(file, config.storage.session_key.clone());
    SessionIdentityStore::new(Arc::new(repository), config.session.id_prefix.clone())
}
