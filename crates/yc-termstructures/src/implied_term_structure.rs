//! `ImpliedTermStructure`: another curve seen from a later date.

use crate::term_structure::TermStructure;
use crate::yield_term_structure::YieldTermStructure;
use std::rc::Rc;
use std::sync::Arc;
use yc_core::errors::Result;
use yc_core::{DiscountFactor, Time};
use yc_math::Extrapolator;
use yc_time::{Date, DayCounter};

/// A view of an existing curve re-anchored at a later reference date.
///
/// `P'(t) = P(τ + t) / P(τ)`, where `τ` is the time of the new reference
/// date on the original curve.  The original is queried with
/// extrapolation enabled; the view applies its own range checks.
#[derive(Debug)]
pub struct ImpliedTermStructure {
    original: Rc<dyn YieldTermStructure>,
    reference_date: Date,
    extrapolate: bool,
}

impl ImpliedTermStructure {
    /// Re-anchor `original` at `reference_date`.
    pub fn new(original: Rc<dyn YieldTermStructure>, reference_date: Date) -> Self {
        Self {
            original,
            reference_date,
            extrapolate: false,
        }
    }
}

impl Extrapolator for ImpliedTermStructure {
    fn allows_extrapolation(&self) -> bool {
        self.extrapolate
    }

    fn set_extrapolation(&mut self, allow: bool) {
        self.extrapolate = allow;
    }
}

impl TermStructure for ImpliedTermStructure {
    fn reference_date(&self) -> Result<Date> {
        Ok(self.reference_date)
    }

    fn day_counter(&self) -> &Arc<dyn DayCounter> {
        self.original.day_counter()
    }

    fn max_date(&self) -> Date {
        self.original.max_date()
    }
}

impl YieldTermStructure for ImpliedTermStructure {
    fn discount_impl(&self, t: Time) -> Result<DiscountFactor> {
        let offset = self.original.time_from_reference(self.reference_date)?;
        Ok(self.original.discount_with(offset + t, true)?
            / self.original.discount_with(offset, true)?)
    }
}
