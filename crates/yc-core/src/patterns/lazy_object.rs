//! LazyObject pattern.
//!
//! A lazy object caches an expensive computation and recalculates only when
//! its inputs change.  Inputs announce changes through the observer pattern:
//! the object registers its [`DirtyFlag`] with every observable it depends
//! on, and the flag is consumed on the next [`calculate`](LazyObject::calculate).
//! Recalculation is therefore pull-based, never eager.
//!
//! The cache bookkeeping uses interior mutability (`Cell`) so a calculation
//! can be triggered through `&self`.

use crate::errors::Result;
use crate::patterns::observable::Observer;
use std::cell::Cell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

/// A thread-safe invalidation flag usable as an [`Observer`].
#[derive(Debug, Default)]
pub struct DirtyFlag {
    dirty: AtomicBool,
}

impl DirtyFlag {
    /// Create a new, clean flag.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Mark the flag dirty.
    pub fn set(&self) {
        self.dirty.store(true, Ordering::Release);
    }

    /// Return `true` if the flag is dirty.
    pub fn is_set(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }

    /// Clear the flag, returning whether it was dirty.
    pub fn take(&self) -> bool {
        self.dirty.swap(false, Ordering::AcqRel)
    }
}

impl Observer for DirtyFlag {
    fn update(&self) {
        self.set();
    }
}

/// Bookkeeping fields required by [`LazyObject`].
///
/// Embed this in your struct and return it from
/// [`lazy_state`](LazyObject::lazy_state).
///
/// # Example
/// ```
/// use std::cell::Cell;
/// use yc_core::patterns::lazy_object::{LazyObject, LazyState};
///
/// struct Doubler {
///     state: LazyState,
///     input: Cell<f64>,
///     result: Cell<f64>,
/// }
///
/// impl LazyObject for Doubler {
///     fn perform_calculations(&self) -> yc_core::errors::Result<()> {
///         self.result.set(2.0 * self.input.get());
///         Ok(())
///     }
///     fn lazy_state(&self) -> &LazyState { &self.state }
/// }
///
/// let obj = Doubler { state: LazyState::new(), input: Cell::new(21.0), result: Cell::new(0.0) };
/// obj.calculate().unwrap();
/// assert_eq!(obj.result.get(), 42.0);
/// ```
#[derive(Debug)]
pub struct LazyState {
    calculated: Cell<bool>,
    freeze_count: Cell<u32>,
    invalidation: Arc<DirtyFlag>,
}

impl LazyState {
    /// Create a new `LazyState` whose cache is initially stale.
    pub fn new() -> Self {
        Self {
            calculated: Cell::new(false),
            freeze_count: Cell::new(0),
            invalidation: DirtyFlag::new(),
        }
    }

    /// The observer to register with every input of the lazy object.
    pub fn observer(&self) -> Weak<dyn Observer> {
        let flag: Arc<dyn Observer> = self.invalidation.clone();
        Arc::downgrade(&flag)
    }
}

impl Default for LazyState {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for objects that lazily compute and cache their results.
pub trait LazyObject {
    /// Perform the actual (expensive) calculation.
    ///
    /// Called by [`calculate`][Self::calculate] when the cache is stale.  On
    /// error the cache stays stale, so the next call retries.
    fn perform_calculations(&self) -> Result<()>;

    /// Access the embedded bookkeeping.
    fn lazy_state(&self) -> &LazyState;

    /// Ensure results are up to date.
    ///
    /// Pending invalidations are honoured unless the object is frozen; a
    /// frozen object still computes once if it never has.
    fn calculate(&self) -> Result<()> {
        let state = self.lazy_state();
        if !self.is_frozen() && state.invalidation.take() {
            state.calculated.set(false);
        }
        if !state.calculated.get() {
            state.calculated.set(true);
            if let Err(e) = self.perform_calculations() {
                state.calculated.set(false);
                return Err(e);
            }
        }
        Ok(())
    }

    /// Mark the cached result as stale without triggering a recalculation.
    fn update(&self) {
        self.lazy_state().invalidation.set();
    }

    /// Defer invalidation until [`unfreeze`][Self::unfreeze] is called.
    fn freeze(&self) {
        let count = &self.lazy_state().freeze_count;
        count.set(count.get() + 1);
    }

    /// Undo one call to [`freeze`][Self::freeze].  Invalidations received
    /// while frozen take effect on the next calculation.
    fn unfreeze(&self) {
        let count = &self.lazy_state().freeze_count;
        count.set(count.get().saturating_sub(1));
    }

    /// Return `true` if the cache is valid and no invalidation is pending.
    fn is_calculated(&self) -> bool {
        let state = self.lazy_state();
        state.calculated.get() && (self.is_frozen() || !state.invalidation.is_set())
    }

    /// Return `true` if invalidation is currently deferred.
    fn is_frozen(&self) -> bool {
        self.lazy_state().freeze_count.get() > 0
    }
}
