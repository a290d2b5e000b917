//! Deterministic display order over task views.
//!
//! # Responsibility
//! - Impose one total order on a filtered subset.
//!
//! # Invariants
//! - Ordering is a pure comparator: equal inputs compare equal, and the
//!   result never depends on input order beyond the recency tiebreak.
//! - Tier order: priority rank, then due-date tier, then recency.

use crate::model::task::Task;
use chrono::NaiveDate;
use std::cmp::Ordering;

/// Composite comparator defining the display order.
///
/// 1. Priority rank ascending (high first).
/// 2. When ranks tie: a dated task sorts before an undated one,
///    regardless of how far out the date is; two dated tasks sort by
///    earlier date first; two undated tasks fall through.
/// 3. Recency tiebreak: more recently created first.
pub fn compare_tasks(a: &Task, b: &Task) -> Ordering {
    a.priority
        .rank()
        .cmp(&b.priority.rank())
        .then_with(|| compare_due_dates(a.due_date, b.due_date))
        .then_with(|| b.created_at.cmp(&a.created_at))
}

fn compare_due_dates(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sorts a filtered view into display order with a stable sort.
pub fn sort_tasks(mut tasks: Vec<&Task>) -> Vec<&Task> {
    tasks.sort_by(|a, b| compare_tasks(a, b));
    tasks
}

#[cfg(test)]
mod tests {
    use super::{compare_tasks, sort_tasks};
    use crate::model::task::{Task, TaskCategory, TaskPriority};
    use chrono::NaiveDate;
    use std::cmp::Ordering;

    fn task(priority: TaskPriority, due: Option<&str>, created_at: i64) -> Task {
        let mut task = Task::new("fixture", TaskCategory::Video, priority, None).unwrap();
        task.due_date = due.map(|value| value.parse::<NaiveDate>().unwrap());
        task.created_at = created_at;
        task
    }

    #[test]
    fn higher_priority_rank_wins_over_everything_else() {
        let high = task(TaskPriority::High, None, 1);
        let low = task(TaskPriority::Low, Some("2020-01-01"), 999);
        assert_eq!(compare_tasks(&high, &low), Ordering::Less);
    }

    #[test]
    fn dated_task_sorts_before_undated_at_equal_rank() {
        let dated = task(TaskPriority::Medium, Some("2099-12-31"), 1);
        let undated = task(TaskPriority::Medium, None, 999);
        assert_eq!(compare_tasks(&dated, &undated), Ordering::Less);
    }

    #[test]
    fn earlier_due_date_sorts_first() {
        let earlier = task(TaskPriority::Medium, Some("2025-01-05"), 1);
        let later = task(TaskPriority::Medium, Some("2025-01-10"), 999);
        assert_eq!(compare_tasks(&earlier, &later), Ordering::Less);
    }

    #[test]
    fn recency_breaks_remaining_ties() {
        let newer = task(TaskPriority::Medium, None, 200);
        let older = task(TaskPriority::Medium, None, 100);
        assert_eq!(compare_tasks(&newer, &older), Ordering::Less);

        let dated_newer = task(TaskPriority::Medium, Some("2025-03-01"), 200);
        let dated_older = task(TaskPriority::Medium, Some("2025-03-01"), 100);
        assert_eq!(compare_tasks(&dated_newer, &dated_older), Ordering::Less);
    }

    #[test]
    fn sort_applies_full_tier_order() {
        let a = task(TaskPriority::High, Some("2025-01-10"), 1);
        let b = task(TaskPriority::High, Some("2025-01-05"), 2);
        let c = task(TaskPriority::High, None, 3);
        let d = task(TaskPriority::Medium, Some("2025-01-01"), 4);

        let sorted = sort_tasks(vec![&a, &b, &c, &d]);
        let ids: Vec<_> = sorted.iter().map(|task| task.id).collect();
        assert_eq!(ids, vec![b.id, a.id, c.id, d.id]);
    }
}
