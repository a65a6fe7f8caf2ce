//! Read-only projection over a `UniqueList`.

use crate::collection::change::{ListObserver, ObserverId};
use crate::collection::record::Record;
use crate::collection::unique_list::UniqueList;

/// Borrowed, read-only view of a `UniqueList`.
///
/// Exposes no mutation path. Binding observers is allowed since observing
/// does not change list contents.
pub struct ListView<'a, T: Record> {
    list: &'a UniqueList<T>,
}

impl<'a, T: Record> ListView<'a, T> {
    pub(crate) fn new(list: &'a UniqueList<T>) -> Self {
        Self { list }
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.list.get(index)
    }

    pub fn contains(&self, candidate: &T) -> bool {
        self.list.contains(candidate)
    }

    pub fn position_of(&self, candidate: &T) -> Option<usize> {
        self.list.position_of(candidate)
    }

    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.list.iter()
    }

    /// Copies the current elements out, e.g. for persistence snapshots.
    pub fn to_vec(&self) -> Vec<T> {
        self.list.iter().cloned().collect()
    }

    pub fn subscribe<O>(&self, observer: O) -> ObserverId
    where
        O: ListObserver<T> + 'static,
    {
        self.list.subscribe(observer)
    }

    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        self.list.unsubscribe(id)
    }
}

impl<T: Record> Clone for ListView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Record> Copy for ListView<'_, T> {}

impl<'a, T: Record> IntoIterator for ListView<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.iter()
    }
}
