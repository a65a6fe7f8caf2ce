//! Duplicate-free observable list primitives.
//!
//! # Responsibility
//! - Own ordered element sequences that never hold two equivalent records.
//! - Notify bound observers synchronously after every successful mutation.
//! - Hand out read-only views to display/persistence collaborators.
//!
//! # Invariants
//! - No two stored elements are mutually equivalent under `Record::is_equivalent`.
//! - Failed operations leave contents untouched and emit no change event.
//! - Insertion order is preserved except for whole-list replacement.
//!
//! # See also
//! - `crate::task_list` for the owning model.

pub mod change;
pub mod error;
pub mod record;
pub mod unique_list;
pub mod view;
