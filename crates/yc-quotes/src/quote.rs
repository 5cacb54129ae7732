//! `Quote` trait and `SimpleQuote` implementation.

use std::sync::{Arc, Mutex, PoisonError, Weak};
use yc_core::{Handle, Observable, ObservableImpl, Observer, Real};

/// A market-observable value.
///
/// Observers registered with a quote are notified whenever its value
/// changes.
pub trait Quote: Observable + std::fmt::Debug + Send + Sync {
    /// Return the current value.
    ///
    /// Returns `None` if the quote is not currently set.
    fn value(&self) -> Option<Real>;

    /// Return `true` if the quote is currently valid.
    fn is_valid(&self) -> bool {
        self.value().is_some()
    }
}

/// A settable market quote.
///
/// Shared between the market-data side, which calls
/// [`set_value`](Self::set_value), and the consumers, which hold it in a
/// `Handle<dyn Quote>`.
#[derive(Debug, Default)]
pub struct SimpleQuote {
    value: Mutex<Option<Real>>,
    observers: ObservableImpl,
}

impl SimpleQuote {
    /// Create a new quote with the given value.
    pub fn new(value: Real) -> Self {
        Self {
            value: Mutex::new(Some(value)),
            observers: ObservableImpl::new(),
        }
    }

    /// Create an empty (invalid) quote.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set a new value, notifying observers if it differs from the old one.
    pub fn set_value(&self, value: Real) {
        self.replace(Some(value));
    }

    /// Clear the value, making the quote invalid.
    pub fn reset(&self) {
        self.replace(None);
    }

    /// A handle sharing this quote.
    pub fn handle(self: &Arc<Self>) -> Handle<dyn Quote> {
        let quote: Arc<dyn Quote> = self.clone();
        Handle::from_arc(quote)
    }

    fn replace(&self, value: Option<Real>) {
        let changed = {
            let mut current = self.value.lock().unwrap_or_else(PoisonError::into_inner);
            let changed = *current != value;
            *current = value;
            changed
        };
        if changed {
            self.observers.notify();
        }
    }
}

impl Observable for SimpleQuote {
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

impl Quote for SimpleQuote {
    fn value(&self) -> Option<Real> {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Conversion into a quote handle.
///
/// Lets constructors accept either a plain number, which is wrapped in a
/// fresh [`SimpleQuote`], or a quote shared with the market-data side.
pub trait IntoQuoteHandle {
    /// Convert into a `Handle<dyn Quote>`.
    fn into_quote_handle(self) -> Handle<dyn Quote>;
}

impl IntoQuoteHandle for Real {
    fn into_quote_handle(self) -> Handle<dyn Quote> {
        Arc::new(SimpleQuote::new(self)).handle()
    }
}

impl IntoQuoteHandle for Handle<dyn Quote> {
    fn into_quote_handle(self) -> Handle<dyn Quote> {
        self
    }
}

impl IntoQuoteHandle for Arc<SimpleQuote> {
    fn into_quote_handle(self) -> Handle<dyn Quote> {
        self.handle()
    }
}

impl IntoQuoteHandle for &Arc<SimpleQuote> {
    fn into_quote_handle(self) -> Handle<dyn Quote> {
        self.handle()
    }
}
