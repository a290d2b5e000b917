//! Pure derivations over the task list.
//!
//! # Responsibility
//! - Filtering, ordering and pagination as standalone functions.
//! - No storage or clock access; callers supply everything.
//!
//! # Invariants
//! - Every function here is deterministic in its inputs.
//! - Inputs are borrowed, never mutated.

pub mod filter;
pub mod page;
pub mod sort;
