//! Core task-management engine for taskdeck.
//! This crate is the single source of truth for business invariants.

pub mod board;
pub mod logging;
pub mod model;
pub mod query;
pub mod stats;
pub mod storage;
pub mod store;

pub use board::{BoardView, TaskBoard, PAGE_SIZE};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{
    parse_due_date, validate_content, Task, TaskCategory, TaskId, TaskPriority,
    TaskValidationError,
};
pub use query::filter::{filter_tasks, FilterCriteria, StatusFilter};
pub use query::page::{page_links, paginate, Page, PageLink};
pub use query::sort::{compare_tasks, sort_tasks};
pub use stats::{collect_stats, TaskStats};
pub use storage::{
    JsonFileStorage, MemoryStorage, StorageError, StorageResult, TaskStorage, TASKS_FILE_NAME,
};
pub use store::task_store::TaskStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
