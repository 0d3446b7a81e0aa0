use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use hulpwijzer_core::config::AppConfig;
use hulpwijzer_core::session::SessionIdentityStore;
use hulpwijzer_infrastructure::{ConfigService, HulpwijzerPaths, file_identity_store};

pub mod payload;
pub mod session;

/// Resolved paths and configuration shared by the commands.
pub struct Context {
    pub paths: HulpwijzerPaths,
    pub config: AppConfig,
}

impl Context {
    pub fn load(home: Option<PathBuf>) -> Result<Self> {
        let paths = HulpwijzerPaths::new(home).context("Failed to resolve Hulpwijzer directory")?;
        let config = ConfigService::new(&paths)
            .load()
            .context("Failed to load configuration")?;
        tracing::debug!(base_dir = ?paths.base_dir(), "Loaded configuration");
        Ok(Self { paths, config })
    }

    pub fn identity_store(&self) -> Arc<SessionIdentityStore> {
        Arc::new(file_identity_store(&self.paths, &self.config))
    }
}

/// Reads a whole file, or stdin when `input` is `-`.
pub fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))
}
