//! Invalidation - Re-render Tracking for Panels

use std::cell::Cell;
use std::rc::Rc;

use crate::states::{ConfigStore, SubscriptionId};
use crate::storage::PersistenceBackend;

/// Dirty flag flipped by a store subscription
///
/// Starts dirty so the first frame always renders.
#[derive(Debug)]
pub struct Invalidation {
    dirty: Rc<Cell<bool>>,
    subscription: SubscriptionId,
}

impl Invalidation {
    /// Observe `store` and mark dirty on every change
    pub fn observe<B: PersistenceBackend>(store: &mut ConfigStore<B>) -> Self {
        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        let subscription = store.subscribe(move |_| flag.set(true));
        Self {
            dirty,
            subscription,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    pub fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    pub fn clear(&self) {
        self.dirty.set(false);
    }

    /// Stop observing; the flag keeps its last value
    pub fn detach<B: PersistenceBackend>(&self, store: &mut ConfigStore<B>) -> bool {
        store.unsubscribe(self.subscription)
    }
}
