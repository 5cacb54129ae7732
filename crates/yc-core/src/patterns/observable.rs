//! Observer / Observable pattern.
//!
//! * An **Observable** notifies registered **Observer**s whenever it changes
//!   state.
//! * Observers react in `update()`, typically by setting a dirty flag that
//!   is consumed on the next pull.
//!
//! Observables keep `Weak` references so an observer going away never keeps
//! it alive; dead entries are pruned on notification.  The observer list is
//! guarded by a `Mutex` so observables can be shared across threads (quotes
//! and the global [`Settings`](crate::Settings) singleton).

use std::sync::{Arc, Mutex, PoisonError, Weak};

/// An object that can notify interested parties when it changes.
///
/// All methods take `&self` to support shared ownership.
pub trait Observable {
    /// Register an observer to receive future change notifications.
    fn register_observer(&self, observer: Weak<dyn Observer>);

    /// Remove a previously registered observer.
    fn unregister_observer(&self, observer: &Weak<dyn Observer>);

    /// Notify all currently registered observers that this object changed.
    fn notify_observers(&self);
}

/// An object that reacts to changes in [`Observable`]s it has subscribed to.
pub trait Observer: Send + Sync {
    /// Called by every observable this observer is registered with when that
    /// observable changes state.
    fn update(&self);
}

/// Observer-list bookkeeping that can be embedded in any observable type.
#[derive(Default)]
pub struct ObservableImpl {
    observers: Mutex<Vec<Weak<dyn Observer>>>,
}

impl std::fmt::Debug for ObservableImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservableImpl")
            .field("observers", &self.len())
            .finish()
    }
}

impl ObservableImpl {
    /// Create a new, empty observer list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer.  Registering the same observer twice is a
    /// no-op.  Dead references are pruned first.
    pub fn register(&self, observer: Weak<dyn Observer>) {
        let mut observers = self.observers.lock().unwrap_or_else(PoisonError::into_inner);
        observers.retain(|w| w.strong_count() > 0);
        if !observers.iter().any(|o| Weak::ptr_eq(o, &observer)) {
            observers.push(observer);
        }
    }

    /// Remove an observer (by pointer equality of the `Weak`).
    pub fn unregister(&self, observer: &Weak<dyn Observer>) {
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|o| !Weak::ptr_eq(o, observer));
    }

    /// Notify all live observers, pruning dead references.
    pub fn notify(&self) {
        let live: Vec<Arc<dyn Observer>> = {
            let mut observers = self.observers.lock().unwrap_or_else(PoisonError::into_inner);
            observers.retain(|w| w.strong_count() > 0);
            observers.iter().filter_map(Weak::upgrade).collect()
        };
        // Callbacks run outside the lock so an observer may re-register.
        for observer in live {
            observer.update();
        }
    }

    /// Number of registered (possibly dead) observers.
    pub fn len(&self) -> usize {
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Return `true` if no observer is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
