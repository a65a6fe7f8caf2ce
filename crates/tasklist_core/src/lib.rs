//! Core domain logic for the task list.
//! This crate is the single source of truth for list invariants.

pub mod collection;
pub mod logging;
pub mod model;
pub mod task_list;

pub use collection::change::{ListChange, ListObserver, ObserverId};
pub use collection::error::{ListError, ListResult};
pub use collection::record::Record;
pub use collection::unique_list::UniqueList;
pub use collection::view::ListView;
pub use logging::{init_logging, logging_status, LogConfig, LogLevel, LoggingError};
pub use model::tag::{Tag, TagValidationError};
pub use model::task::{Task, TaskId, TaskStatus, TaskValidationError};
pub use task_list::{ReadOnlyTaskList, TaskList};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
