//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskdeck_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use chrono::Local;
use taskdeck_core::{
    collect_stats, core_version, default_log_level, init_logging, FilterCriteria, MemoryStorage,
    StatusFilter, TaskBoard, TaskCategory, TaskPriority, TaskStore, TaskValidationError,
};

fn main() {
    let log_dir = std::env::temp_dir().join("taskdeck-cli-logs");
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        eprintln!("taskdeck logging disabled: {err}");
    }

    println!("taskdeck_core version={}", core_version());

    if let Err(err) = run_probe() {
        eprintln!("taskdeck probe failed: {err}");
        std::process::exit(1);
    }
}

/// Seeds an in-memory board and walks the whole core surface once.
fn run_probe() -> Result<(), TaskValidationError> {
    let today = Local::now().date_naive();
    let mut board = TaskBoard::new(TaskStore::load(MemoryStorage::new()));

    board.add("Edit weekly vlog", TaskCategory::Video, TaskPriority::High, Some(today))?;
    let draft = board.add("Draft newsletter", TaskCategory::Writing, TaskPriority::Medium, None)?;
    board.add("Plan meetup agenda", TaskCategory::Event, TaskPriority::Low, None)?;
    board.toggle_complete(draft.id);

    let view = board.view();
    println!(
        "board total={} filtered={} pages={} page={}",
        view.total_tasks,
        view.filtered_tasks.len(),
        view.total_pages,
        view.current_page
    );
    for task in &view.page_tasks {
        println!(
            "page_task priority={} category={} content={}",
            task.priority, task.category, task.content
        );
    }

    board.set_criteria(FilterCriteria {
        category: Some(TaskCategory::Video),
        priority: None,
        status: StatusFilter::Active,
    });
    println!(
        "filter category=video status=active filtered={}",
        board.view().filtered_tasks.len()
    );

    let stats = collect_stats(board.tasks(), today);
    println!(
        "stats total={} completed={} rate={} due_today={}",
        stats.total, stats.completed, stats.completion_rate, stats.due_today
    );
    Ok(())
}
