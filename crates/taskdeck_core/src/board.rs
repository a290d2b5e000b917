//! Caller-side board state: criteria, current page, derived view.
//!
//! # Responsibility
//! - Hold the transient view state (filter criteria, 1-based current
//!   page) next to the store that owns the tasks.
//! - Derive the render view in a fixed order: filter, sort, paginate.
//! - Keep the current page on a non-empty slice after a mutation
//!   shrinks the filtered set.
//!
//! # Invariants
//! - `current_page >= 1` at all times.
//! - Replacing the criteria resets the page to 1 unconditionally.
//! - A mutation steps the page back at most once; a deliberately
//!   out-of-range `set_page` is left alone until the next mutation.

use chrono::NaiveDate;
use log::debug;

use crate::model::task::{Task, TaskCategory, TaskId, TaskPriority, TaskValidationError};
use crate::query::filter::{filter_tasks, FilterCriteria};
use crate::query::page::paginate;
use crate::query::sort::sort_tasks;
use crate::storage::TaskStorage;
use crate::store::task_store::TaskStore;

/// Tasks shown per page across the whole board.
pub const PAGE_SIZE: usize = 6;

/// Everything the presentation layer needs for one render.
#[derive(Debug, Clone)]
pub struct BoardView<'a> {
    /// Count of all stored tasks, ignoring the active criteria.
    pub total_tasks: usize,
    /// Tasks passing the active criteria, in display order.
    pub filtered_tasks: Vec<&'a Task>,
    /// Slice of `filtered_tasks` on the current page.
    pub page_tasks: Vec<&'a Task>,
    /// Page count of the filtered set at `PAGE_SIZE`.
    pub total_pages: usize,
    /// 1-based page the view was derived for.
    pub current_page: usize,
}

/// Store plus transient view state, one instance per widget.
pub struct TaskBoard<S> {
    store: TaskStore<S>,
    criteria: FilterCriteria,
    current_page: usize,
}

impl<S: TaskStorage> TaskBoard<S> {
    /// Wraps a loaded store with the all/all/all criteria on page 1.
    pub fn new(store: TaskStore<S>) -> Self {
        Self {
            store,
            criteria: FilterCriteria::default(),
            current_page: 1,
        }
    }

    /// Creates a task. See [`TaskStore::add`].
    pub fn add(
        &mut self,
        content: impl Into<String>,
        category: TaskCategory,
        priority: TaskPriority,
        due_date: Option<NaiveDate>,
    ) -> Result<Task, TaskValidationError> {
        let task = self.store.add(content, category, priority, due_date)?;
        self.reconcile_page();
        Ok(task)
    }

    /// Flips completion. See [`TaskStore::toggle_complete`].
    pub fn toggle_complete(&mut self, id: TaskId) {
        self.store.toggle_complete(id);
        self.reconcile_page();
    }

    /// Edits the four editable fields. See [`TaskStore::update`].
    pub fn update(
        &mut self,
        id: TaskId,
        content: impl Into<String>,
        category: TaskCategory,
        priority: TaskPriority,
        due_date: Option<NaiveDate>,
    ) -> Result<(), TaskValidationError> {
        self.store.update(id, content, category, priority, due_date)?;
        self.reconcile_page();
        Ok(())
    }

    /// Removes a task. See [`TaskStore::delete`].
    pub fn delete(&mut self, id: TaskId) {
        self.store.delete(id);
        self.reconcile_page();
    }

    /// Replaces the active criteria and jumps back to the first page.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.current_page = 1;
    }

    /// The active filter criteria.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Moves to `page`, floored at 1. Pages past the end are accepted
    /// and render empty.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// The 1-based page the next view will be derived for.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Read view of the canonical sequence, newest first.
    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    /// Derives the render view: filter, sort, then paginate.
    pub fn view(&self) -> BoardView<'_> {
        let filtered = sort_tasks(filter_tasks(self.store.tasks(), &self.criteria));
        let page = paginate(&filtered, PAGE_SIZE, self.current_page);
        let total_pages = page.total_pages;
        let page_tasks = page.items.to_vec();
        BoardView {
            total_tasks: self.store.len(),
            filtered_tasks: filtered,
            page_tasks,
            total_pages,
            current_page: self.current_page,
        }
    }

    /// Steps the page back by one when a mutation left the current page
    /// past the end of a non-empty filtered set.
    fn reconcile_page(&mut self) {
        if self.current_page <= 1 {
            return;
        }
        let filtered = sort_tasks(filter_tasks(self.store.tasks(), &self.criteria));
        let page = paginate(&filtered, PAGE_SIZE, self.current_page);
        if !filtered.is_empty() && page.items.is_empty() {
            self.current_page -= 1;
            debug!(
                "event=page_recover module=board page={} status=ok",
                self.current_page
            );
        }
    }
}
