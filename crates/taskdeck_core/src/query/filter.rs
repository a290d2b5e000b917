//! Pure filter derivation over task views.
//!
//! # Responsibility
//! - Map (tasks, criteria) to the matching read-only subset.
//!
//! # Invariants
//! - All three clauses are ANDed; no clause combination is invalid.
//! - Input order is preserved; tasks are never copied or mutated.

use crate::model::task::{Task, TaskCategory, TaskPriority};

/// Completion-state clause of the filter criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Completed and uncompleted tasks alike.
    #[default]
    All,
    /// Only uncompleted tasks.
    Active,
    /// Only completed tasks.
    Completed,
}

/// User-selected predicate narrowing which tasks are displayed.
///
/// `None` in `category`/`priority` means "all". Transient view state:
/// lives across re-renders but is never persisted, so every session
/// starts from the default all/all/all criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    /// Exact category to keep, or `None` for all categories.
    pub category: Option<TaskCategory>,
    /// Exact priority to keep, or `None` for all priorities.
    pub priority: Option<TaskPriority>,
    /// Completion-state clause.
    pub status: StatusFilter,
}

impl FilterCriteria {
    /// Returns whether one task passes all three clauses.
    pub fn matches(&self, task: &Task) -> bool {
        if self.category.is_some_and(|category| category != task.category) {
            return false;
        }
        if self.priority.is_some_and(|priority| priority != task.priority) {
            return false;
        }
        match self.status {
            StatusFilter::All => true,
            StatusFilter::Active => !task.completed,
            StatusFilter::Completed => task.completed,
        }
    }
}

/// Applies criteria to a sequence, keeping canonical order.
///
/// An empty result is valid and distinct from "no tasks at all"; the
/// caller sees both the input and the output and can message each case.
pub fn filter_tasks<'a>(tasks: &'a [Task], criteria: &FilterCriteria) -> Vec<&'a Task> {
    tasks.iter().filter(|task| criteria.matches(task)).collect()
}
