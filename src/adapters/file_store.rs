//! File-backed preference store.
//!
//! Persists the whole key-value map as one JSON object.  Every `set`
//! rewrites the file through a temporary sibling and a rename, so a crash
//! mid-write leaves the previous contents intact.
//!
//! A file that cannot be parsed is treated as empty: the widget starts
//! with defaults and the next write replaces it.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::app::ports::{PreferenceStore, StoreError};

pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open (or lazily create) the store at `path`.
    ///
    /// Returns `Err(StoreError::IoError)` only if an existing file cannot be
    /// read.  Missing files and unparsable contents both yield an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<BTreeMap<String, String>>(&text) {
                Ok(entries) => {
                    info!("FileStore: loaded {} keys from {}", entries.len(), path.display());
                    entries
                }
                Err(e) => {
                    warn!("FileStore: {} is corrupted ({}), starting empty", path.display(), e);
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("FileStore: no file at {}, starting empty", path.display());
                BTreeMap::new()
            }
            Err(e) => {
                warn!("FileStore: cannot read {}: {}", path.display(), e);
                return Err(StoreError::IoError);
            }
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|_| StoreError::IoError)?;
        }
        let text = serde_json::to_string_pretty(&self.entries).map_err(|_| StoreError::Corrupted)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, text).map_err(|_| StoreError::IoError)?;
        fs::rename(&tmp, &self.path).map_err(|_| StoreError::IoError)
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}
