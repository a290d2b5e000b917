//! Single-file JSON blob storage.
//!
//! # Responsibility
//! - Persist the whole task sequence as one JSON document on disk.
//! - Treat a missing or undecodable file as "no prior state".
//!
//! # Invariants
//! - `save` rewrites the full document; partial updates never happen.
//! - `load` returns a transport error only for I/O failures other than
//!   a missing file.

use super::{decode_blob, StorageError, StorageResult, TaskStorage};
use crate::model::task::Task;
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name used for the task blob inside a profile directory.
pub const TASKS_FILE_NAME: &str = "tasks.json";

/// File-backed blob storage, one JSON document per profile.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Creates storage over an explicit blob file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates storage over the default blob file inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(TASKS_FILE_NAME),
        }
    }

    /// Returns the blob file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskStorage for JsonFileStorage {
    fn load(&self) -> StorageResult<Option<Vec<Task>>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source: err,
                })
            }
        };
        Ok(decode_blob(&raw, &self.path.display().to_string()))
    }

    fn save(&mut self, tasks: &[Task]) -> StorageResult<()> {
        let blob = serde_json::to_string(tasks)?;
        fs::write(&self.path, blob).map_err(|err| StorageError::Io {
            path: self.path.clone(),
            source: err,
        })?;
        debug!(
            "event=tasks_save module=storage status=ok count={} path={}",
            tasks.len(),
            self.path.display()
        );
        Ok(())
    }
}
