//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record and its closed classifications.
//! - Enforce content and due-date validity at construction and edit time.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `content` is non-empty after trimming, and stored trimmed.
//! - `category` and `priority` only ever hold declared variants.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every task record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Closed classification of a task's work domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    /// Video production work.
    Video,
    /// Copy and writing work.
    Writing,
    /// Event organization work.
    Event,
}

impl TaskCategory {
    /// All categories in declaration order, for selectors and breakdowns.
    pub const ALL: [TaskCategory; 3] = [
        TaskCategory::Video,
        TaskCategory::Writing,
        TaskCategory::Event,
    ];

    /// Wire/display name of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Writing => "writing",
            Self::Event => "event",
        }
    }

    /// Parses a wire name back into a category.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "video" => Some(Self::Video),
            "writing" => Some(Self::Writing),
            "event" => Some(Self::Event),
            _ => None,
        }
    }
}

impl Default for TaskCategory {
    fn default() -> Self {
        Self::Video
    }
}

impl Display for TaskCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed urgency level with a fixed total order: high before medium
/// before low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

impl TaskPriority {
    /// All priorities in rank order, for selectors and breakdowns.
    pub const ALL: [TaskPriority; 3] = [
        TaskPriority::High,
        TaskPriority::Medium,
        TaskPriority::Low,
    ];

    /// Sort rank of the priority. Lower rank sorts first.
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }

    /// Wire/display name of the priority.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Parses a wire name back into a priority.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

impl Default for TaskPriority {
    fn default() -> Self {
        Self::Medium
    }
}

impl Display for TaskPriority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation error for task field inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Content is empty or whitespace-only after trimming.
    EmptyContent,
    /// Due-date text is not an ISO calendar date.
    InvalidDueDate(String),
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContent => write!(f, "task content must not be blank"),
            Self::InvalidDueDate(value) => {
                write!(f, "invalid due date `{value}`; expected YYYY-MM-DD")
            }
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical record for a single to-do item.
///
/// Serialized field names match the persisted blob schema: `dueDate` and
/// `createdAt` are camelCase, and `dueDate` is omitted when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable unique ID assigned at creation.
    pub id: TaskId,
    /// Trimmed, non-empty task text.
    pub content: String,
    /// Work-domain classification.
    pub category: TaskCategory,
    /// Urgency level.
    pub priority: TaskPriority,
    /// Optional calendar due date (day granularity).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Completion flag; starts false.
    pub completed: bool,
    /// Creation time in unix epoch milliseconds.
    pub created_at: i64,
}

impl Task {
    /// Creates a new task with a generated stable ID and the current
    /// creation timestamp.
    ///
    /// # Invariants
    /// - `completed` starts as `false`.
    /// - `content` is stored trimmed; blank content is rejected.
    pub fn new(
        content: impl Into<String>,
        category: TaskCategory,
        priority: TaskPriority,
        due_date: Option<NaiveDate>,
    ) -> Result<Self, TaskValidationError> {
        let content = content.into();
        validate_content(&content)?;
        Ok(Self {
            id: Uuid::new_v4(),
            content: content.trim().to_string(),
            category,
            priority,
            due_date,
            completed: false,
            created_at: Utc::now().timestamp_millis(),
        })
    }

    /// Replaces the editable fields, leaving `id`, `completed` and
    /// `created_at` untouched.
    ///
    /// Rejects blank content before applying any change.
    pub fn edit(
        &mut self,
        content: impl Into<String>,
        category: TaskCategory,
        priority: TaskPriority,
        due_date: Option<NaiveDate>,
    ) -> Result<(), TaskValidationError> {
        let content = content.into();
        validate_content(&content)?;
        self.content = content.trim().to_string();
        self.category = category;
        self.priority = priority;
        self.due_date = due_date;
        Ok(())
    }

    /// Flips the completion flag.
    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }

    /// Checks model invariants on an existing record.
    ///
    /// Read paths use this to reject invalid persisted state instead of
    /// masking it.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        validate_content(&self.content)
    }

    /// Returns whether this task is open and due strictly before `today`.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date.is_some_and(|due| due < today)
    }

    /// Returns whether this task is open and due exactly on `today`.
    pub fn is_due_today(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date == Some(today)
    }
}

/// Checks that content is usable task text (non-empty after trimming).
///
/// [`Task::new`] and [`Task::edit`] run the same check, so input
/// boundaries and record construction enforce one rule.
pub fn validate_content(value: &str) -> Result<(), TaskValidationError> {
    if value.trim().is_empty() {
        return Err(TaskValidationError::EmptyContent);
    }
    Ok(())
}

/// Parses optional due-date form input.
///
/// Blank input means "no due date". Anything else must be an ISO
/// calendar date (`YYYY-MM-DD`); malformed text is rejected here so the
/// sort tier never sees an unparseable date.
pub fn parse_due_date(value: &str) -> Result<Option<NaiveDate>, TaskValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<NaiveDate>()
        .map(Some)
        .map_err(|_| TaskValidationError::InvalidDueDate(trimmed.to_string()))
}
