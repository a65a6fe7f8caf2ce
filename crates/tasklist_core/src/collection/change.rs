//! Change events and synchronous observer delivery.
//!
//! # Invariants
//! - Observers run in subscription order, in-line with the mutating call.
//! - Subscribing or unsubscribing from inside a callback is allowed; the
//!   new observer set applies from the next event on.

use std::cell::{Cell, RefCell};
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

/// Change emitted after a successful list mutation.
///
/// Items are snapshots taken at notification time, so observers never need
/// to borrow the list back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListChange<T> {
    /// One element appended at `index` (always the tail).
    Added { index: usize, item: T },
    /// Element at `index` had its data replaced in place.
    Updated { index: usize, old: T, new: T },
    /// Element formerly at `index` was removed.
    Removed { index: usize, item: T },
    /// Whole sequence replaced; `items` is the new content.
    Reset { items: Vec<T> },
}

impl<T> ListChange<T> {
    /// Stable event name used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Added { .. } => "added",
            Self::Updated { .. } => "updated",
            Self::Removed { .. } => "removed",
            Self::Reset { .. } => "reset",
        }
    }
}

/// Consumer bound to a list's change stream.
pub trait ListObserver<T> {
    fn on_change(&self, change: &ListChange<T>);
}

impl<T, F> ListObserver<T> for F
where
    F: Fn(&ListChange<T>),
{
    fn on_change(&self, change: &ListChange<T>) {
        self(change)
    }
}

/// Handle returned by `subscribe`, used to unbind the observer later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObserverId(u64);

/// Observer bindings for one list.
///
/// Interior mutability lets read-only views bind observers; the list is
/// single-threaded, which `Rc` enforces by type.
pub(crate) struct ObserverRegistry<T> {
    next_id: Cell<u64>,
    observers: RefCell<Vec<(ObserverId, Rc<dyn ListObserver<T>>)>>,
}

impl<T> ObserverRegistry<T> {
    pub(crate) fn new() -> Self {
        Self {
            next_id: Cell::new(0),
            observers: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn subscribe(&self, observer: Rc<dyn ListObserver<T>>) -> ObserverId {
        let id = ObserverId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.observers.borrow_mut().push((id, observer));
        id
    }

    pub(crate) fn unsubscribe(&self, id: ObserverId) -> bool {
        let mut observers = self.observers.borrow_mut();
        let before = observers.len();
        observers.retain(|(bound, _)| *bound != id);
        observers.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.observers.borrow().len()
    }

    /// Delivers the event built by `change` to every bound observer.
    ///
    /// The event is only built when someone listens.
    pub(crate) fn notify_with(&self, change: impl FnOnce() -> ListChange<T>) {
        // Snapshot the bindings so callbacks may re-enter subscribe/unsubscribe.
        let observers: Vec<Rc<dyn ListObserver<T>>> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();
        if observers.is_empty() {
            return;
        }

        let change = change();
        for observer in observers {
            observer.on_change(&change);
        }
    }
}

impl<T> Debug for ObserverRegistry<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("bound", &self.len())
            .finish()
    }
}
