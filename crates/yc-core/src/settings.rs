//! Global library settings.
//!
//! [`Settings`] holds the **evaluation date**, the date at which all
//! calculations are performed.  It is a process-wide singleton accessed via
//! a `std::sync::OnceLock`, and it is observable: objects whose reference
//! date floats with the evaluation date register with it and are invalidated
//! when the date changes.
//!
//! Thread safety: the evaluation date is stored behind a `Mutex` so that it
//! can be changed from any thread.  Tests that change the evaluation date
//! should use [`ScopedEvaluationDate`] so it is restored when done.

use crate::patterns::observable::{Observable, ObservableImpl, Observer};
use chrono::NaiveDate;
use std::sync::{Mutex, OnceLock, PoisonError, Weak};

/// Process-wide settings.
#[derive(Debug, Default)]
pub struct Settings {
    evaluation_date: Mutex<Option<NaiveDate>>,
    observers: ObservableImpl,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(Settings::default)
    }

    /// The current evaluation date; today's local date when none was set.
    pub fn evaluation_date(&self) -> NaiveDate {
        self.explicit_evaluation_date()
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// The evaluation date if one was set explicitly.
    pub fn explicit_evaluation_date(&self) -> Option<NaiveDate> {
        *self
            .evaluation_date
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Set the evaluation date, notifying observers if it changed.
    pub fn set_evaluation_date(&self, date: NaiveDate) {
        self.replace(Some(date));
    }

    /// Clear the evaluation date, resetting it to "use today".
    pub fn reset_evaluation_date(&self) {
        self.replace(None);
    }

    fn replace(&self, date: Option<NaiveDate>) {
        let previous = std::mem::replace(
            &mut *self
                .evaluation_date
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
            date,
        );
        if previous != date {
            self.observers.notify();
        }
    }
}

impl Observable for Settings {
    fn register_observer(&self, observer: Weak<dyn Observer>) {
        self.observers.register(observer);
    }

    fn unregister_observer(&self, observer: &Weak<dyn Observer>) {
        self.observers.unregister(observer);
    }

    fn notify_observers(&self) {
        self.observers.notify();
    }
}

/// Sets the global evaluation date for the lifetime of the guard and
/// restores the previous value on drop.
#[derive(Debug)]
pub struct ScopedEvaluationDate {
    previous: Option<NaiveDate>,
}

impl ScopedEvaluationDate {
    /// Set `date` as the evaluation date until the guard is dropped.
    pub fn new(date: NaiveDate) -> Self {
        let settings = Settings::instance();
        let previous = settings.explicit_evaluation_date();
        settings.set_evaluation_date(date);
        Self { previous }
    }
}

impl Drop for ScopedEvaluationDate {
    fn drop(&mut self) {
        Settings::instance().replace(self.previous);
    }
}
