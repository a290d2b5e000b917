//! Persistence collaborator contract and blob-store implementations.
//!
//! # Responsibility
//! - Define the key-value blob contract the task store persists through.
//! - Keep serialization and file-system details out of store logic.
//!
//! # Invariants
//! - `load` reports missing and corrupt blobs as absent (`Ok(None)`),
//!   never as parse errors.
//! - `save` overwrites the entire blob or fails with a transport error.

use crate::model::task::Task;
use log::warn;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

mod json_file;
mod memory;

pub use json_file::{JsonFileStorage, TASKS_FILE_NAME};
pub use memory::MemoryStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Transport-level persistence failure.
///
/// Schema-level corruption is not an error: `load` maps it to "absent"
/// so a damaged blob behaves like no prior state.
#[derive(Debug)]
pub enum StorageError {
    /// File-system read or write failure.
    Io { path: PathBuf, source: io::Error },
    /// Task sequence could not be serialized into blob form.
    Serialize(serde_json::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "storage I/O failure at `{}`: {source}", path.display())
            }
            Self::Serialize(err) => write!(f, "task blob serialization failed: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Key-value blob persistence contract consumed by the task store.
///
/// Implementations own a single blob holding the entire task sequence;
/// there is no per-record addressing. Round-trip through `save` then
/// `load` must reproduce an equivalent sequence in the same order.
pub trait TaskStorage {
    /// Returns the last-saved sequence, or `None` when no usable prior
    /// state exists (nothing saved yet, or the blob fails to decode).
    fn load(&self) -> StorageResult<Option<Vec<Task>>>;

    /// Replaces the stored blob with a serialization of `tasks`.
    fn save(&mut self, tasks: &[Task]) -> StorageResult<()>;
}

/// Decodes a raw blob into tasks, treating any schema or invariant
/// violation as corruption.
///
/// Corruption is logged and reported as `None` so callers fall back to
/// empty state instead of propagating a parse error.
pub(crate) fn decode_blob(raw: &str, origin: &str) -> Option<Vec<Task>> {
    let tasks: Vec<Task> = match serde_json::from_str(raw) {
        Ok(tasks) => tasks,
        Err(err) => {
            warn!("event=tasks_load module=storage status=corrupt origin={origin} error={err}");
            return None;
        }
    };

    let mut seen_ids = HashSet::with_capacity(tasks.len());
    for task in &tasks {
        if let Err(err) = task.validate() {
            warn!(
                "event=tasks_load module=storage status=corrupt origin={origin} task={} error={err}",
                task.id
            );
            return None;
        }
        if !seen_ids.insert(task.id) {
            warn!(
                "event=tasks_load module=storage status=corrupt origin={origin} error=duplicate_task_id id={}",
                task.id
            );
            return None;
        }
    }

    Some(tasks)
}
