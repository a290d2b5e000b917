//! Task store: the single owner of canonical task state.
//!
//! # Responsibility
//! - Route every mutation through one component so invariants are
//!   centrally enforced.
//! - Trigger write-through persistence after each mutation.

pub mod task_store;
