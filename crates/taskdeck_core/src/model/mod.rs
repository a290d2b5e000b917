//! Domain model for task records.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Make illegal category/priority/date values unrepresentable.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Record validity is enforced at construction and edit time.

pub mod task;
