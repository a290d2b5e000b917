//! Shared-handle in-memory blob storage.
//!
//! Backs tests and ephemeral (non-persistent) profiles. The blob is the
//! same serialized JSON form the file storage writes, so decode behavior
//! is identical across implementations.

use super::{decode_blob, StorageResult, TaskStorage};
use crate::model::task::Task;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory blob storage.
///
/// Cloning shares the underlying blob, which lets a caller keep a probe
/// handle on storage that was moved into a store. Single-threaded,
/// matching the engine's one-logical-actor model.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    blob: Rc<RefCell<Option<String>>>,
}

impl MemoryStorage {
    /// Creates empty storage with no prior state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage pre-seeded with a raw blob, as if a previous
    /// session had saved it.
    pub fn with_blob(raw: impl Into<String>) -> Self {
        Self {
            blob: Rc::new(RefCell::new(Some(raw.into()))),
        }
    }

    /// Returns a copy of the current raw blob, if any was saved.
    pub fn blob(&self) -> Option<String> {
        self.blob.borrow().clone()
    }
}

impl TaskStorage for MemoryStorage {
    fn load(&self) -> StorageResult<Option<Vec<Task>>> {
        match self.blob.borrow().as_deref() {
            Some(raw) => Ok(decode_blob(raw, "memory")),
            None => Ok(None),
        }
    }

    fn save(&mut self, tasks: &[Task]) -> StorageResult<()> {
        let blob = serde_json::to_string(tasks)?;
        *self.blob.borrow_mut() = Some(blob);
        Ok(())
    }
}
