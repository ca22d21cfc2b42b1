//! Durable local key-value storage.
//!
//! A single JSON file holds the two fixed keys the application persists across
//! restarts: the current identity and the theme preference. Everything else in
//! the service is in-memory only and discarded on shutdown.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::models::{ThemeMode, User};

pub const USER_KEY: &str = "companio-user";
pub const THEME_KEY: &str = "companio-theme";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct StorageFile {
    #[serde(rename = "companio-user", skip_serializing_if = "Option::is_none")]
    user: Option<User>,
    #[serde(rename = "companio-theme", skip_serializing_if = "Option::is_none")]
    theme: Option<ThemeMode>,
}

/// File-backed key-value storage with the two fixed keys above.
///
/// Reads are served from memory; every mutation rewrites the file atomically
/// (temp file + rename) before returning.
pub struct KvStorage {
    path: PathBuf,
    cells: Mutex<StorageFile>,
}

impl KvStorage {
    /// Loads storage from `path`. A missing file starts empty; a corrupt file
    /// is discarded with a warning rather than failing startup.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let cells = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(parsed) => parsed,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "discarding corrupt storage file");
                    StorageFile::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => StorageFile::default(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            cells: Mutex::new(cells),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn user(&self) -> Option<User> {
        self.cells.lock().unwrap().user.clone()
    }

    pub fn set_user(&self, user: &User) -> Result<(), StorageError> {
        let mut cells = self.cells.lock().unwrap();
        cells.user = Some(user.clone());
        self.persist(&cells)
    }

    pub fn clear_user(&self) -> Result<(), StorageError> {
        let mut cells = self.cells.lock().unwrap();
        cells.user = None;
        self.persist(&cells)
    }

    pub fn theme(&self) -> Option<ThemeMode> {
        self.cells.lock().unwrap().theme
    }

    pub fn set_theme(&self, theme: ThemeMode) -> Result<(), StorageError> {
        let mut cells = self.cells.lock().unwrap();
        cells.theme = Some(theme);
        self.persist(&cells)
    }

    fn persist(&self, cells: &StorageFile) -> Result<(), StorageError> {
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, serde_json::to_string_pretty(cells)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
