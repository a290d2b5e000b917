//! Canonical task sequence owner with write-through persistence.
//!
//! # Responsibility
//! - Own every task record and apply all mutations through stable APIs.
//! - Persist the full sequence through the storage collaborator after
//!   each mutation.
//!
//! # Invariants
//! - In-memory state is authoritative; persistence failures never roll
//!   it back and never surface to callers.
//! - Sequence order is most-recently-created first; `created_at` never
//!   increases from front to back.
//! - Validation failures reject an operation before any state change.

use crate::model::task::{
    validate_content, Task, TaskCategory, TaskId, TaskPriority, TaskValidationError,
};
use crate::storage::TaskStorage;
use chrono::NaiveDate;
use log::{error, info};

/// Owner of the canonical ordered task sequence.
///
/// Generic over the persistence collaborator so file-backed and
/// in-memory profiles share one mutation path.
pub struct TaskStore<S> {
    tasks: Vec<Task>,
    storage: S,
}

impl<S: TaskStorage> TaskStore<S> {
    /// Loads the last-saved sequence from the collaborator, once at
    /// startup.
    ///
    /// Absent or corrupt prior state yields an empty store; a transport
    /// failure is logged and also yields an empty store. This never
    /// fails: corruption is treated as "no prior state".
    pub fn load(storage: S) -> Self {
        let tasks = match storage.load() {
            Ok(Some(tasks)) => {
                info!(
                    "event=tasks_load module=store status=ok count={}",
                    tasks.len()
                );
                tasks
            }
            Ok(None) => {
                info!("event=tasks_load module=store status=ok count=0 prior=absent");
                Vec::new()
            }
            Err(err) => {
                error!("event=tasks_load module=store status=error fallback=empty error={err}");
                Vec::new()
            }
        };
        Self { tasks, storage }
    }

    /// Creates a task and prepends it to the sequence.
    ///
    /// # Contract
    /// - Blank content is rejected before any state change and before
    ///   any persistence write.
    /// - The new task gets a fresh unique ID, `completed = false`, and a
    ///   creation timestamp clamped so it never falls behind the newest
    ///   existing task (wall-clock regression keeps the order invariant).
    /// - Returns a copy of the stored record.
    pub fn add(
        &mut self,
        content: impl Into<String>,
        category: TaskCategory,
        priority: TaskPriority,
        due_date: Option<NaiveDate>,
    ) -> Result<Task, TaskValidationError> {
        let mut task = Task::new(content, category, priority, due_date)?;
        if let Some(newest) = self.tasks.first() {
            task.created_at = task.created_at.max(newest.created_at);
        }
        self.tasks.insert(0, task.clone());
        self.persist();
        Ok(task)
    }

    /// Flips the completion flag of the matching task.
    ///
    /// Unknown ids are stale view references and are tolerated as silent
    /// no-ops; the write-through still runs.
    pub fn toggle_complete(&mut self, id: TaskId) {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
            task.toggle_completed();
        }
        self.persist();
    }

    /// Replaces content/category/priority/due-date on the matching task,
    /// leaving `completed`, `created_at` and `id` untouched.
    ///
    /// Blank content is rejected before any state change (and before the
    /// id lookup, so the rejection is uniform for stale references).
    /// Unknown ids are silent no-ops; the write-through still runs.
    pub fn update(
        &mut self,
        id: TaskId,
        content: impl Into<String>,
        category: TaskCategory,
        priority: TaskPriority,
        due_date: Option<NaiveDate>,
    ) -> Result<(), TaskValidationError> {
        let content = content.into();
        validate_content(&content)?;
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
            task.edit(content, category, priority, due_date)?;
        }
        self.persist();
        Ok(())
    }

    /// Removes the matching task. Unknown ids are silent no-ops; the
    /// write-through still runs.
    pub fn delete(&mut self, id: TaskId) {
        self.tasks.retain(|task| task.id != id);
        self.persist();
    }

    /// Read view of the canonical sequence, newest first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up one task by id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Number of tasks in the store.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the store holds no tasks at all.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Hands the entire current sequence to the collaborator.
    ///
    /// Best-effort: a failure is logged and swallowed, never retried.
    /// The in-memory sequence stays the source of truth for the session.
    fn persist(&mut self) {
        if let Err(err) = self.storage.save(&self.tasks) {
            error!(
                "event=tasks_persist module=store status=error count={} error={err}",
                self.tasks.len()
            );
        }
    }
}
