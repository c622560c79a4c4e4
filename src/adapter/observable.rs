use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Weak;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Receives data-set notifications from an adapter.
///
/// Callbacks take `&self`: observers that need to mutate state hold it behind
/// their own interior mutability.
pub trait DataSetObserver {
    /// The adapter's data changed and dependent views should rebuild.
    fn on_changed(&self);

    /// The adapter's data is no longer valid or available.
    fn on_invalidated(&self);
}

/// Handle returned by [`DataSetObservable::register`], used to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObserverId(u64);

/// Explicit subscribe/unsubscribe registry backing an adapter's notifications.
///
/// Observers are held weakly so a dropped view never keeps receiving signals,
/// and are notified in registration order.
#[derive(Default)]
pub struct DataSetObservable {
    next_id: Cell<u64>,
    observers: RefCell<IndexMap<ObserverId, Weak<dyn DataSetObserver>>>,
}

impl fmt::Debug for DataSetObservable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataSetObservable")
            .field("observer_count", &self.observer_count())
            .finish()
    }
}

impl DataSetObservable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, observer: Weak<dyn DataSetObserver>) -> ObserverId {
        let id = ObserverId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.observers.borrow_mut().insert(id, observer);
        trace!(observer = id.0, "register data set observer");
        id
    }

    /// Returns `false` when `id` was not registered.
    pub fn unregister(&self, id: ObserverId) -> bool {
        let removed = self.observers.borrow_mut().shift_remove(&id).is_some();
        trace!(observer = id.0, removed, "unregister data set observer");
        removed
    }

    /// Number of registered observers that are still alive.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers
            .borrow()
            .values()
            .filter(|observer| observer.strong_count() > 0)
            .count()
    }

    pub fn notify_changed(&self) {
        for observer in self.live_observers() {
            observer.on_changed();
        }
    }

    pub fn notify_invalidated(&self) {
        for observer in self.live_observers() {
            observer.on_invalidated();
        }
    }

    // Snapshot before dispatch: observers may register or unregister while
    // being notified.
    fn live_observers(&self) -> Vec<std::rc::Rc<dyn DataSetObserver>> {
        let mut observers = self.observers.borrow_mut();
        observers.retain(|_, observer| observer.strong_count() > 0);
        observers.values().filter_map(Weak::upgrade).collect()
    }
}
