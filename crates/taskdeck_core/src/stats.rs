//! Aggregate counters over the task list for the summary strip.

use chrono::NaiveDate;

use crate::model::task::{Task, TaskCategory, TaskPriority};

/// Snapshot of the list-wide counters, derived per render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskStats {
    /// All tasks, any state.
    pub total: usize,
    /// Tasks marked completed.
    pub completed: usize,
    /// Completed share as a rounded integer percent; 0 for an empty list.
    pub completion_rate: u32,
    /// Uncompleted tasks due exactly on `today`.
    pub due_today: usize,
    /// Per-category totals in [`TaskCategory::ALL`] order.
    pub by_category: Vec<(TaskCategory, usize)>,
    /// Uncompleted tasks per priority in [`TaskPriority::ALL`] order.
    pub open_by_priority: Vec<(TaskPriority, usize)>,
}

/// Derives the summary counters from the full task list.
pub fn collect_stats(tasks: &[Task], today: NaiveDate) -> TaskStats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|task| task.completed).count();
    let completion_rate = if total == 0 {
        0
    } else {
        ((completed * 100 + total / 2) / total) as u32
    };
    let due_today = tasks.iter().filter(|task| task.is_due_today(today)).count();
    let by_category = TaskCategory::ALL
        .iter()
        .map(|&category| {
            let count = tasks.iter().filter(|task| task.category == category).count();
            (category, count)
        })
        .collect();
    let open_by_priority = TaskPriority::ALL
        .iter()
        .map(|&priority| {
            let count = tasks
                .iter()
                .filter(|task| !task.completed && task.priority == priority)
                .count();
            (priority, count)
        })
        .collect();
    TaskStats {
        total,
        completed,
        completion_rate,
        due_today,
        by_category,
        open_by_priority,
    }
}
