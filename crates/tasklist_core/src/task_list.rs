//! Owning task-list model and its read-only contract.
//!
//! # Responsibility
//! - Own the task list and the master tag list for one session.
//! - Keep every tag used by a task present in the master tag list.
//! - Expose both lists read-only through `ReadOnlyTaskList`.
//!
//! # Invariants
//! - Command layers mutate state only through `TaskList` methods.
//! - Failed mutations leave both lists untouched.
//! - Domain errors are returned to the caller, never logged here.

use crate::collection::error::ListResult;
use crate::collection::unique_list::UniqueList;
use crate::collection::view::ListView;
use crate::model::tag::Tag;
use crate::model::task::Task;
use log::debug;

/// Read-only access to task-list state for display and persistence.
pub trait ReadOnlyTaskList {
    /// Tasks in list order; never holds two equivalent tasks.
    fn tasks(&self) -> ListView<'_, Task>;

    /// Tags in first-use order; never holds two equal tags.
    fn tags(&self) -> ListView<'_, Tag>;
}

/// Session-scoped owner of the task and tag lists.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskList {
    tasks: UniqueList<Task>,
    tags: UniqueList<Tag>,
}

impl TaskList {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a model holding a validated copy of `source`.
    pub fn from_read_only(source: &dyn ReadOnlyTaskList) -> ListResult<Self> {
        let mut model = Self::new();
        model.reset_data(source)?;
        Ok(model)
    }

    /// Adds `task` and registers its tags in the master tag list.
    ///
    /// # Errors
    /// - `ListError::DuplicateEntity` when an equivalent task exists.
    pub fn add_task(&mut self, task: Task) -> ListResult<()> {
        let new_tags = self.unseen_tags(&task.tags);
        self.tasks.add(task)?;
        self.register_tags(new_tags);
        debug!(
            "event=task_add module=task_list status=ok tasks={} tags={}",
            self.tasks.len(),
            self.tags.len()
        );
        Ok(())
    }

    /// Overwrites the task at `index` with `edited`'s data.
    ///
    /// # Errors
    /// - `ListError::IndexOutOfRange` when `index` is past the end.
    /// - `ListError::DuplicateEntity` when `edited` matches another task.
    pub fn update_task(&mut self, index: usize, edited: &Task) -> ListResult<()> {
        let new_tags = self.unseen_tags(&edited.tags);
        self.tasks.update_at(index, edited)?;
        self.register_tags(new_tags);
        debug!("event=task_update module=task_list status=ok index={index}");
        Ok(())
    }

    /// Removes the task equivalent to `target` and returns the stored copy.
    ///
    /// Tags stay registered even when no remaining task uses them.
    ///
    /// # Errors
    /// - `ListError::EntityNotFound` when no equivalent task exists.
    pub fn remove_task(&mut self, target: &Task) -> ListResult<Task> {
        let removed = self.tasks.remove(target)?;
        debug!(
            "event=task_remove module=task_list status=ok tasks={}",
            self.tasks.len()
        );
        Ok(removed)
    }

    /// Replaces all tasks, re-validating uniqueness, then syncs tags.
    ///
    /// # Errors
    /// - `ListError::DuplicateEntity` when `tasks` holds equivalent entries;
    ///   nothing changes in that case.
    pub fn set_tasks(&mut self, tasks: Vec<Task>) -> ListResult<()> {
        let staged = UniqueList::try_from_items(tasks)?;
        let new_tags = self.unseen_tags(staged.iter().flat_map(|task| task.tags.iter()));
        self.tasks.replace_all_trusted(&staged);
        self.register_tags(new_tags);
        debug!(
            "event=task_set module=task_list status=ok tasks={}",
            self.tasks.len()
        );
        Ok(())
    }

    /// Replaces the master tag list, re-validating uniqueness.
    ///
    /// Tags still used by tasks are appended back after `tags`.
    ///
    /// # Errors
    /// - `ListError::DuplicateEntity` when `tags` repeats a tag.
    pub fn set_tags(&mut self, tags: Vec<Tag>) -> ListResult<()> {
        let mut staged = UniqueList::try_from_items(tags)?;
        for tag in self.tasks.iter().flat_map(|task| task.tags.iter()) {
            if !staged.contains(tag) {
                staged.add(tag.clone())?;
            }
        }
        self.tags.replace_all_trusted(&staged);
        debug!(
            "event=tag_set module=task_list status=ok tags={}",
            self.tags.len()
        );
        Ok(())
    }

    /// Replaces both lists with a validated copy of `source`.
    ///
    /// Both lists are staged before either is swapped in, so a duplicate in
    /// either source list leaves this model unchanged.
    ///
    /// # Errors
    /// - `ListError::DuplicateEntity` when `source` violates uniqueness.
    pub fn reset_data(&mut self, source: &dyn ReadOnlyTaskList) -> ListResult<()> {
        let tasks = UniqueList::try_from_items(source.tasks().to_vec())?;
        let mut tags = UniqueList::try_from_items(source.tags().to_vec())?;
        for tag in tasks.iter().flat_map(|task| task.tags.iter()) {
            if !tags.contains(tag) {
                tags.add(tag.clone())?;
            }
        }

        self.tasks.replace_all_trusted(&tasks);
        self.tags.replace_all_trusted(&tags);
        debug!(
            "event=reset_data module=task_list status=ok tasks={} tags={}",
            self.tasks.len(),
            self.tags.len()
        );
        Ok(())
    }

    fn unseen_tags<'a>(&self, candidates: impl IntoIterator<Item = &'a Tag>) -> Vec<Tag> {
        let mut unseen: Vec<Tag> = Vec::new();
        for tag in candidates {
            if !self.tags.contains(tag) && !unseen.contains(tag) {
                unseen.push(tag.clone());
            }
        }
        unseen
    }

    fn register_tags(&mut self, tags: Vec<Tag>) {
        for tag in tags {
            let added = self.tags.add(tag);
            debug_assert!(added.is_ok(), "unseen_tags must filter registered tags");
        }
    }
}

impl ReadOnlyTaskList for TaskList {
    fn tasks(&self) -> ListView<'_, Task> {
        self.tasks.view()
    }

    fn tags(&self) -> ListView<'_, Tag> {
        self.tags.view()
    }
}
