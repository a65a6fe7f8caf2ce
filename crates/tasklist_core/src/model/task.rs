//! Task domain model.
//!
//! # Responsibility
//! - Define the record stored in the task list.
//! - Own the equivalence relation used for de-duplication.
//!
//! # Invariants
//! - `uuid` is stable and never nil; it does not take part in equivalence.
//! - `name` is trimmed and never blank.
//! - `tags` holds no duplicate tag.

use crate::collection::record::Record;
use crate::model::tag::Tag;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of one task row.
pub type TaskId = Uuid;

/// Completion state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Todo,
    Done,
}

/// Task record.
///
/// Two tasks are equivalent when their names match, regardless of id,
/// status or tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTask")]
pub struct Task {
    /// Positional identity; kept across `reset_from`.
    pub uuid: TaskId,
    pub name: String,
    pub status: TaskStatus,
    /// Ordered, duplicate-free.
    pub tags: Vec<Tag>,
}

/// Wire shape checked through `Task::validate` on deserialize.
#[derive(Deserialize)]
struct RawTask {
    uuid: TaskId,
    name: String,
    #[serde(default)]
    status: TaskStatus,
    #[serde(default)]
    tags: Vec<Tag>,
}

impl TryFrom<RawTask> for Task {
    type Error = TaskValidationError;

    fn try_from(raw: RawTask) -> Result<Self, Self::Error> {
        let task = Self {
            uuid: raw.uuid,
            name: raw.name.trim().to_string(),
            status: raw.status,
            tags: raw.tags,
        };
        task.validate()?;
        Ok(task)
    }
}

impl Task {
    /// Creates a `todo` task with a generated id.
    pub fn new(name: impl Into<String>) -> Result<Self, TaskValidationError> {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates a `todo` task with a caller-provided id.
    ///
    /// Used by import paths where identity already exists.
    pub fn with_id(uuid: TaskId, name: impl Into<String>) -> Result<Self, TaskValidationError> {
        let task = Self {
            uuid,
            name: name.into().trim().to_string(),
            status: TaskStatus::Todo,
            tags: Vec::new(),
        };
        task.validate()?;
        Ok(task)
    }

    /// Builder-style tag attachment; repeated tags are ignored.
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        for tag in tags {
            self.add_tag(tag);
        }
        self
    }

    /// Attaches `tag` unless already present. Returns whether it was added.
    pub fn add_tag(&mut self, tag: Tag) -> bool {
        if self.tags.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    pub fn mark_done(&mut self) {
        self.status = TaskStatus::Done;
    }

    pub fn reopen(&mut self) {
        self.status = TaskStatus::Todo;
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }

    /// Checks field invariants.
    ///
    /// # Errors
    /// - `NilUuid`, `BlankName` or `DuplicateTag` on the first violation.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.uuid.is_nil() {
            return Err(TaskValidationError::NilUuid);
        }
        if self.name.trim().is_empty() {
            return Err(TaskValidationError::BlankName);
        }
        for (index, tag) in self.tags.iter().enumerate() {
            if self.tags[..index].contains(tag) {
                return Err(TaskValidationError::DuplicateTag(tag.name().to_string()));
            }
        }
        Ok(())
    }
}

impl Record for Task {
    fn is_equivalent(&self, other: &Self) -> bool {
        self.name.trim() == other.name.trim()
    }

    fn reset_from(&mut self, other: &Self) {
        self.name.clone_from(&other.name);
        self.status = other.status;
        self.tags.clone_from(&other.tags);
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mark = if self.is_done() { "x" } else { " " };
        write!(f, "[{mark}] {}", self.name)?;
        for tag in &self.tags {
            write!(f, " {tag}")?;
        }
        Ok(())
    }
}

/// Task field validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    NilUuid,
    BlankName,
    DuplicateTag(String),
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilUuid => write!(f, "task uuid must not be nil"),
            Self::BlankName => write!(f, "task name must not be blank"),
            Self::DuplicateTag(name) => write!(f, "task carries tag `{name}` more than once"),
        }
    }
}

impl Error for TaskValidationError {}
