//! Atomic key/value TOML file.
//!
//! The durable storage behind the session identifier: a flat table of string
//! keys to string values, the same model as browser local storage.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};

use hulpwijzer_core::error::HulpwijzerError;
use thiserror::Error;

/// Failure reading or writing a [`KeyValueFile`].
///
/// Every variant that touches the disk carries the path involved.
#[derive(Debug, Error)]
pub enum KeyValueFileError {
    #[error("cannot access {}: {source}", .path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not a key/value table: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("cannot encode key/value table: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("cannot lock {}: {source}", .path.display())]
    Lock {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl From<KeyValueFileError> for HulpwijzerError {
    fn from(e: KeyValueFileError) -> Self {
        match e {
            KeyValueFileError::Corrupt { .. } | KeyValueFileError::Encode(_) => {
                HulpwijzerError::Serialization {
                    format: "TOML".to_string(),
                    message: e.to_string(),
                }
            }
            KeyValueFileError::Access { .. } | KeyValueFileError::Lock { .. } => {
                HulpwijzerError::io(e.to_string())
            }
        }
    }
}

type Entries = BTreeMap<String, String>;

/// A handle to a key/value TOML file.
///
/// - **Atomicity**: writes go to a tmp file that is renamed over the target
/// - **Isolation**: read-modify-write cycles hold an exclusive file lock
/// - **Durability**: the tmp file is fsynced before the rename
#[derive(Debug, Clone)]
pub struct KeyValueFile {
    path: PathBuf,
}

impl KeyValueFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every entry. A missing or blank file has no entries.
    pub fn load(&self) -> Result<Entries, KeyValueFileError> {
        if !self.path.exists() {
            return Ok(Entries::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| KeyValueFileError::Access {
            path: self.path.clone(),
            source,
        })?;
        if content.trim().is_empty() {
            return Ok(Entries::new());
        }

        toml::from_str(&content).map_err(|source| KeyValueFileError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    pub fn get(&self, key: &str) -> Result<Option<String>, KeyValueFileError> {
        Ok(self.load()?.remove(key))
    }

    /// Writes one entry, keeping every other key in the table.
    pub fn set(&self, key: &str, value: &str) -> Result<(), KeyValueFileError> {
        let _lock = FileLock::acquire(&self.path)?;
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn save(&self, entries: &Entries) -> Result<(), KeyValueFileError> {
        let access = |source| KeyValueFileError::Access {
            path: self.path.clone(),
            source,
        };
        let (parent, file_name) = match (self.path.parent(), self.path.file_name()) {
            (Some(parent), Some(file_name)) => (parent, file_name),
            _ => {
                return Err(access(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "path has no parent directory or file name",
                )));
            }
        };
        fs::create_dir_all(parent).map_err(access)?;

        let toml_string = toml::to_string(entries)?;

        let tmp_path = parent.join(format!(".{}.tmp", file_name.to_string_lossy()));
        let mut tmp_file = File::create(&tmp_path).map_err(access)?;
        tmp_file.write_all(toml_string.as_bytes()).map_err(access)?;
        tmp_file.sync_all().map_err(access)?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path).map_err(access)
    }
}

/// Exclusive lock held for the duration of an update.
struct FileLock {
    #[allow(dead_code)]
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self, KeyValueFileError> {
        let lock_path = path.with_extension("lock");
        let lock_err = |source| KeyValueFileError::Lock {
            path: lock_path.clone(),
            source,
        };

        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).map_err(lock_err)?;
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(lock_err)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive().map_err(lock_err)?;
        }

        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // best effort
        let _ = fs::remove_file(&self.lock_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let file = KeyValueFile::new(temp_dir.path().join("storage.toml"));

        assert!(file.load().unwrap().is_empty());
        assert_eq!(file.get("hulpwijzer_session_id").unwrap(), None);
    }

    #[test]
    fn test_set_keeps_other_keys() {
        let temp_dir = TempDir::new().unwrap();
        let file = KeyValueFile::new(temp_dir.path().join("nested/storage.toml"));

        file.set("hulpwijzer_session_id", "sess_abc_1").unwrap();
        file.set("other", "value").unwrap();
        assert_eq!(
            file.get("hulpwijzer_session_id").unwrap().as_deref(),
            Some("sess_abc_1")
        );
        assert_eq!(file.get("other").unwrap().as_deref(), Some("value"));

        file.set("hulpwijzer_session_id", "sess_def_2").unwrap();
        assert_eq!(file.load().unwrap().len(), 2);
        assert_eq!(
            file.get("hulpwijzer_session_id").unwrap().as_deref(),
            Some("sess_def_2")
        );
    }

    #[test]
    fn test_no_temp_or_lock_file_left_behind() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.toml");
        let file = KeyValueFile::new(path.clone());

        file.set("k", "v").unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join(".storage.toml.tmp").exists());
        assert!(!temp_dir.path().join("storage.lock").exists());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.toml");
        fs::write(&path, "this is = = not toml").unwrap();

        let err = KeyValueFile::new(path.clone()).load().unwrap_err();
        assert!(matches!(&err, KeyValueFileError::Corrupt { path: p, .. } if *p == path));

        let converted: HulpwijzerError = err.into();
        assert!(matches!(converted, HulpwijzerError::Serialization { .. }));
    }

    #[test]
    fn test_unreadable_path_is_access_error() {
        let temp_dir = TempDir::new().unwrap();
        // A directory where the file should be.
        let path = temp_dir.path().join("storage.toml");
        fs::create_dir(&path).unwrap();

        let err = KeyValueFile::new(path).load().unwrap_err();
        assert!(matches!(err, KeyValueFileError::Access { .. }));
        assert!(HulpwijzerError::from(err).is_io());
    }
}
