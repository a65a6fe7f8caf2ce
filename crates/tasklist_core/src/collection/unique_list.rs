//! Ordered, duplicate-free, observable list.
//!
//! # Responsibility
//! - Be the sole owner and mutator of its backing sequence.
//! - Reject mutations that would store two equivalent records.
//! - Emit one `ListChange` per successful mutation.
//!
//! # Invariants
//! - Pairwise, no two elements satisfy `Record::is_equivalent`.
//! - Every error path returns before touching `items`.
//! - Duplicate checks are linear scans; lists are small and single-user.
//!
//! Iterating while mutating is rejected at compile time: `iter()` and
//! `view()` borrow the list shared, every mutation borrows it exclusively.

use crate::collection::change::{ListChange, ListObserver, ObserverId, ObserverRegistry};
use crate::collection::error::{ListError, ListResult};
use crate::collection::record::Record;
use crate::collection::view::ListView;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

/// Duplicate-free list of `Record`s.
pub struct UniqueList<T: Record> {
    items: Vec<T>,
    observers: ObserverRegistry<T>,
}

impl<T: Record> UniqueList<T> {
    /// Creates an empty list with no bound observers.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            observers: ObserverRegistry::new(),
        }
    }

    /// Builds a list by adding `items` one at a time.
    ///
    /// # Errors
    /// - `ListError::DuplicateEntity` when two input items are equivalent.
    pub fn try_from_items<I>(items: I) -> ListResult<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut staged = Self::new();
        for item in items {
            staged.add(item)?;
        }
        Ok(staged)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Returns whether some stored element is equivalent to `candidate`.
    pub fn contains(&self, candidate: &T) -> bool {
        self.position_of(candidate).is_some()
    }

    /// Returns the index of the element equivalent to `candidate`.
    pub fn position_of(&self, candidate: &T) -> Option<usize> {
        self.items
            .iter()
            .position(|existing| existing.is_equivalent(candidate))
    }

    /// Appends `item` at the tail.
    ///
    /// # Errors
    /// - `ListError::DuplicateEntity` when an equivalent element is stored.
    pub fn add(&mut self, item: T) -> ListResult<()> {
        if self.contains(&item) {
            return Err(ListError::DuplicateEntity);
        }

        let index = self.items.len();
        self.items.push(item);
        self.observers.notify_with(|| ListChange::Added {
            index,
            item: self.items[index].clone(),
        });
        Ok(())
    }

    /// Replaces the data of the element at `index` with `new_data`.
    ///
    /// The element keeps its position and is mutated through
    /// `Record::reset_from`, so observers see `ListChange::Updated`
    /// rather than a removal followed by an insertion.
    ///
    /// `new_data` may be equivalent to the element it replaces; that is a
    /// content update, not a duplicate.
    ///
    /// # Errors
    /// - `ListError::IndexOutOfRange` when `index >= len`.
    /// - `ListError::DuplicateEntity` when `new_data` is equivalent to an
    ///   element at another index.
    pub fn update_at(&mut self, index: usize, new_data: &T) -> ListResult<()> {
        let len = self.items.len();
        if index >= len {
            return Err(ListError::IndexOutOfRange { index, len });
        }

        let collides = self
            .items
            .iter()
            .enumerate()
            .any(|(position, existing)| position != index && existing.is_equivalent(new_data));
        if collides {
            return Err(ListError::DuplicateEntity);
        }

        let old = self.items[index].clone();
        self.items[index].reset_from(new_data);
        self.observers.notify_with(|| ListChange::Updated {
            index,
            old,
            new: self.items[index].clone(),
        });
        Ok(())
    }

    /// Removes the element equivalent to `candidate` and returns it.
    ///
    /// # Errors
    /// - `ListError::EntityNotFound` when no stored element matches.
    pub fn remove(&mut self, candidate: &T) -> ListResult<T> {
        let index = self
            .position_of(candidate)
            .ok_or(ListError::EntityNotFound)?;

        let removed = self.items.remove(index);
        self.observers.notify_with(|| ListChange::Removed {
            index,
            item: removed.clone(),
        });
        Ok(removed)
    }

    /// Replaces the whole sequence with a copy of `replacement`.
    ///
    /// `replacement` already upholds the uniqueness invariant, so nothing is
    /// re-validated. Observers bound to `replacement` are not copied.
    pub fn replace_all_trusted(&mut self, replacement: &UniqueList<T>) {
        self.install(replacement.items.clone());
    }

    /// Replaces the whole sequence with `items`, re-validating uniqueness.
    ///
    /// Items are staged into a fresh list first; the staged list is swapped
    /// in only when every item was accepted.
    ///
    /// # Errors
    /// - `ListError::DuplicateEntity` when two input items are equivalent.
    ///   The current contents are left untouched and no event is emitted.
    pub fn replace_all_validating<I>(&mut self, items: I) -> ListResult<()>
    where
        I: IntoIterator<Item = T>,
    {
        let staged = Self::try_from_items(items)?;
        self.install(staged.items);
        Ok(())
    }

    /// Iterates elements in list order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the read-only projection handed to collaborators.
    pub fn view(&self) -> ListView<'_, T> {
        ListView::new(self)
    }

    /// Binds `observer` to this list's change stream.
    pub fn subscribe<O>(&self, observer: O) -> ObserverId
    where
        O: ListObserver<T> + 'static,
    {
        self.observers.subscribe(Rc::new(observer))
    }

    /// Unbinds a previously subscribed observer.
    ///
    /// Returns `false` when `id` is not bound to this list.
    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn install(&mut self, items: Vec<T>) {
        self.items = items;
        self.observers.notify_with(|| ListChange::Reset {
            items: self.items.clone(),
        });
    }
}

impl<T: Record> Default for UniqueList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Clones contents only; the copy starts without observers.
impl<T: Record> Clone for UniqueList<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            observers: ObserverRegistry::new(),
        }
    }
}

/// Order-sensitive, element-wise `PartialEq`; an edited field makes lists differ.
impl<T: Record + PartialEq> PartialEq for UniqueList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Record + Eq> Eq for UniqueList<T> {}

impl<T: Record + Debug> Debug for UniqueList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UniqueList")
            .field("items", &self.items)
            .field("observers", &self.observers)
            .finish()
    }
}

impl<'a, T: Record> IntoIterator for &'a UniqueList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
