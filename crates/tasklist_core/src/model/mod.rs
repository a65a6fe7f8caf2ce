//! Records stored in the task list.
//!
//! # Responsibility
//! - Define `Task` and `Tag` and their equivalence relations.
//! - Validate field invariants at construction and on deserialize.
//!
//! # Invariants
//! - Equivalence is owned by each record type, never by the list.

pub mod tag;
pub mod task;
