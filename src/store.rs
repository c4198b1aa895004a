//! Persistence of the checklist state as one opaque JSON blob. The engine
//! itself performs no I/O; callers load before `run` and save afterwards.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::checklist::ChecklistState;
use crate::config;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("state serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Get/set of the persisted state blob.
pub trait StateStore {
    /// `None` when nothing was stored yet (first run).
    fn load(&self) -> Result<Option<ChecklistState>, StoreError>;
    fn save(&self, state: &ChecklistState) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
}

/// File-backed store: one pretty-printed JSON document, written atomically
/// (temp file in the target directory, then persisted over the old blob).
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default platform location.
    pub fn default_location() -> Self {
        Self::new(config::checklist_state_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> Result<Option<ChecklistState>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn save(&self, state: &ChecklistState) -> Result<(), StoreError> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)?;

        let mut staged = tempfile::NamedTempFile::new_in(dir)?;
        staged.write_all(serde_json::to_string_pretty(state)?.as_bytes())?;
        staged
            .persist(&self.path)
            .map_err(|e| StoreError::Io(e.error))?;

        tracing::debug!(path = %self.path.display(), "checklist state saved");
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
