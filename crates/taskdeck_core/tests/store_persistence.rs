use std::cell::RefCell;
use std::collections::HashSet;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use taskdeck_core::{
    JsonFileStorage, MemoryStorage, StorageError, StorageResult, Task, TaskCategory, TaskPriority,
    TaskStorage, TaskStore, TaskValidationError, TASKS_FILE_NAME,
};

#[test]
fn add_then_reload_round_trips_through_the_blob() {
    let storage = MemoryStorage::new();
    let probe = storage.clone();

    let mut store = TaskStore::load(storage);
    store
        .add("Record intro", TaskCategory::Video, TaskPriority::High, None)
        .unwrap();
    store
        .add("Draft outline", TaskCategory::Writing, TaskPriority::Low, None)
        .unwrap();

    let reloaded = TaskStore::load(probe.clone());
    assert_eq!(reloaded.tasks(), store.tasks());
}

#[test]
fn add_prepends_newest_first() {
    let mut store = TaskStore::load(MemoryStorage::new());
    store
        .add("first", TaskCategory::Video, TaskPriority::Medium, None)
        .unwrap();
    store
        .add("second", TaskCategory::Video, TaskPriority::Medium, None)
        .unwrap();
    store
        .add("third", TaskCategory::Video, TaskPriority::Medium, None)
        .unwrap();

    let contents: Vec<&str> = store.tasks().iter().map(|task| task.content.as_str()).collect();
    assert_eq!(contents, vec!["third", "second", "first"]);
}

#[test]
fn rapid_adds_get_unique_ids_and_non_increasing_timestamps() {
    let mut store = TaskStore::load(MemoryStorage::new());
    for n in 0..25 {
        store
            .add(
                format!("task {n}"),
                TaskCategory::Writing,
                TaskPriority::Medium,
                None,
            )
            .unwrap();
    }

    let ids: HashSet<_> = store.tasks().iter().map(|task| task.id).collect();
    assert_eq!(ids.len(), 25);

    for pair in store.tasks().windows(2) {
        assert!(
            pair[0].created_at >= pair[1].created_at,
            "newer task must not carry an older timestamp"
        );
    }
}

#[test]
fn unknown_id_mutations_are_no_ops_but_still_write_through() {
    let journal = SaveJournal::default();
    let mut store = TaskStore::load(RecordingStorage::new(journal.clone()));
    let task = store
        .add("only task", TaskCategory::Event, TaskPriority::High, None)
        .unwrap();
    assert_eq!(journal.save_count(), 1);

    let unknown = uuid::Uuid::new_v4();
    store.toggle_complete(unknown);
    store.delete(unknown);
    store
        .update(unknown, "renamed", TaskCategory::Video, TaskPriority::Low, None)
        .unwrap();

    assert_eq!(journal.save_count(), 4);
    assert_eq!(store.tasks().len(), 1);
    assert_eq!(store.tasks()[0], task);
    assert_eq!(journal.last_saved(), vec![task]);
}

#[test]
fn validation_failure_writes_nothing() {
    let journal = SaveJournal::default();
    let mut store = TaskStore::load(RecordingStorage::new(journal.clone()));
    let task = store
        .add("valid", TaskCategory::Video, TaskPriority::Medium, None)
        .unwrap();
    assert_eq!(journal.save_count(), 1);

    let err = store
        .add("   ", TaskCategory::Video, TaskPriority::Medium, None)
        .unwrap_err();
    assert_eq!(err, TaskValidationError::EmptyContent);

    let err = store
        .update(task.id, "  ", TaskCategory::Video, TaskPriority::Medium, None)
        .unwrap_err();
    assert_eq!(err, TaskValidationError::EmptyContent);

    assert_eq!(journal.save_count(), 1);
    assert_eq!(store.tasks()[0].content, "valid");
}

#[test]
fn corrupt_blob_loads_as_empty_and_next_write_repairs_it() {
    let storage = MemoryStorage::with_blob("{ not json at all");
    let probe = storage.clone();

    let mut store = TaskStore::load(storage);
    assert!(store.is_empty());

    store
        .add("fresh start", TaskCategory::Video, TaskPriority::High, None)
        .unwrap();

    let repaired: Vec<Task> = serde_json::from_str(&probe.blob().unwrap()).unwrap();
    assert_eq!(repaired.len(), 1);
    assert_eq!(repaired[0].content, "fresh start");
}

#[test]
fn blob_with_duplicate_ids_counts_as_corrupt() {
    let task = Task::new("dup", TaskCategory::Video, TaskPriority::Medium, None).unwrap();
    let blob = serde_json::to_string(&vec![task.clone(), task]).unwrap();

    let store = TaskStore::load(MemoryStorage::with_blob(blob));
    assert!(store.is_empty());
}

#[test]
fn failing_storage_never_reaches_the_caller() {
    let mut store = TaskStore::load(FailingStorage);
    assert!(store.is_empty());

    let task = store
        .add("kept in memory", TaskCategory::Writing, TaskPriority::Medium, None)
        .unwrap();
    assert_eq!(store.tasks(), &[task.clone()]);

    store.delete(task.id);
    assert!(store.is_empty());
}

#[test]
fn json_file_storage_round_trips_on_disk() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = TaskStore::load(JsonFileStorage::in_dir(dir.path()));
    store
        .add("Record intro", TaskCategory::Video, TaskPriority::High, None)
        .unwrap();
    store
        .add("Book venue", TaskCategory::Event, TaskPriority::Low, None)
        .unwrap();
    let saved = store.tasks().to_vec();

    let blob_path = dir.path().join(TASKS_FILE_NAME);
    let raw = std::fs::read_to_string(&blob_path).unwrap();
    let on_disk: Vec<Task> = serde_json::from_str(&raw).unwrap();
    assert_eq!(on_disk, saved);

    let reloaded = TaskStore::load(JsonFileStorage::in_dir(dir.path()));
    assert_eq!(reloaded.tasks(), saved.as_slice());
}

#[test]
fn missing_file_loads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = TaskStore::load(JsonFileStorage::in_dir(dir.path()));
    assert!(store.is_empty());
}

/// Shared journal of every blob the store handed to `save`.
#[derive(Clone, Default)]
struct SaveJournal {
    writes: Rc<RefCell<Vec<Vec<Task>>>>,
}

impl SaveJournal {
    fn save_count(&self) -> usize {
        self.writes.borrow().len()
    }

    fn last_saved(&self) -> Vec<Task> {
        self.writes.borrow().last().cloned().unwrap_or_default()
    }
}

/// Storage double that records every write and starts empty.
struct RecordingStorage {
    journal: SaveJournal,
}

impl RecordingStorage {
    fn new(journal: SaveJournal) -> Self {
        Self { journal }
    }
}

impl TaskStorage for RecordingStorage {
    fn load(&self) -> StorageResult<Option<Vec<Task>>> {
        Ok(None)
    }

    fn save(&mut self, tasks: &[Task]) -> StorageResult<()> {
        self.journal.writes.borrow_mut().push(tasks.to_vec());
        Ok(())
    }
}

/// Storage double whose every operation fails with a transport error.
struct FailingStorage;

impl TaskStorage for FailingStorage {
    fn load(&self) -> StorageResult<Option<Vec<Task>>> {
        Err(broken_pipe())
    }

    fn save(&mut self, _tasks: &[Task]) -> StorageResult<()> {
        Err(broken_pipe())
    }
}

fn broken_pipe() -> StorageError {
    StorageError::Io {
        path: PathBuf::from("/unreachable/tasks.json"),
        source: io::Error::new(io::ErrorKind::BrokenPipe, "storage offline"),
    }
}
