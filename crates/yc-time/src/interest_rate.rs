//! Interest rate with compounding and day-counting conventions.
//!
//! An `InterestRate` bundles a rate value with a `DayCounter`, a
//! `Compounding` convention, and a `Frequency`.  It computes compound and
//! discount factors and converts between conventions.

use crate::date::Date;
use crate::day_counter::DayCounter;
use crate::frequency::Frequency;
use std::sync::Arc;
use yc_core::errors::{Error, Result};
use yc_core::{ensure, Compounding, DiscountFactor, Real, Time};

/// An interest rate with associated compounding and day-counting conventions.
#[derive(Debug, Clone)]
pub struct InterestRate {
    rate: Real,
    dc: Arc<dyn DayCounter>,
    compounding: Compounding,
    frequency: Frequency,
}

impl InterestRate {
    /// Create a new interest rate.
    ///
    /// The frequency is only used by the compounded conventions, which
    /// require a regular one.
    pub fn new(
        rate: Real,
        dc: impl DayCounter + 'static,
        compounding: Compounding,
        frequency: Frequency,
    ) -> Result<Self> {
        Self::with_day_counter(rate, Arc::new(dc), compounding, frequency)
    }

    /// Create a new interest rate sharing an existing day counter.
    pub fn with_day_counter(
        rate: Real,
        dc: Arc<dyn DayCounter>,
        compounding: Compounding,
        frequency: Frequency,
    ) -> Result<Self> {
        if uses_frequency(compounding) {
            periods(frequency)?;
        }
        Ok(Self {
            rate,
            dc,
            compounding,
            frequency,
        })
    }

    /// The rate value.
    pub fn rate(&self) -> Real {
        self.rate
    }

    /// The day counter.
    pub fn day_counter(&self) -> &dyn DayCounter {
        &*self.dc
    }

    /// The compounding convention.
    pub fn compounding(&self) -> Compounding {
        self.compounding
    }

    /// The compounding frequency.
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Growth of one unit over `t` years.
    pub fn compound_factor(&self, t: Time) -> Result<Real> {
        ensure!(t >= 0.0, "negative time ({t}) not allowed");
        let r = self.rate;
        let factor = match self.compounding {
            Compounding::Simple => 1.0 + r * t,
            Compounding::Continuous => (r * t).exp(),
            Compounding::Compounded => {
                let f = periods(self.frequency)?;
                (1.0 + r / f).powf(f * t)
            }
            Compounding::SimpleThenCompounded => {
                let f = periods(self.frequency)?;
                if t <= 1.0 / f {
                    1.0 + r * t
                } else {
                    (1.0 + r / f).powf(f * t)
                }
            }
            Compounding::CompoundedThenSimple => {
                let f = periods(self.frequency)?;
                if t <= 1.0 / f {
                    (1.0 + r / f).powf(f * t)
                } else {
                    1.0 + r * t
                }
            }
        };
        ensure!(factor > 0.0, "non-positive compound factor {factor} for rate {r} over {t}");
        Ok(factor)
    }

    /// Growth of one unit between two dates, measured with this rate's day
    /// counter.
    pub fn compound_factor_between(&self, d1: Date, d2: Date) -> Result<Real> {
        self.compound_factor(self.dc.year_fraction(d1, d2))
    }

    /// `1 / compound_factor(t)`.
    pub fn discount_factor(&self, t: Time) -> Result<DiscountFactor> {
        Ok(1.0 / self.compound_factor(t)?)
    }

    /// The rate with the given conventions that has the same compound
    /// factor over `t`.
    pub fn equivalent_rate(
        &self,
        compounding: Compounding,
        frequency: Frequency,
        t: Time,
    ) -> Result<InterestRate> {
        Self::implied_rate(
            self.compound_factor(t)?,
            self.dc.clone(),
            compounding,
            frequency,
            t,
        )
    }

    /// The rate that produces `compound` over `t` under the given
    /// conventions.
    pub fn implied_rate(
        compound: Real,
        dc: Arc<dyn DayCounter>,
        compounding: Compounding,
        frequency: Frequency,
        t: Time,
    ) -> Result<InterestRate> {
        ensure!(compound > 0.0, "positive compound factor required, got {compound}");
        let rate = if compound == 1.0 {
            ensure!(t >= 0.0, "non-negative time required, got {t}");
            0.0
        } else {
            ensure!(t > 0.0, "positive time required, got {t}");
            match compounding {
                Compounding::Simple => (compound - 1.0) / t,
                Compounding::Continuous => compound.ln() / t,
                Compounding::Compounded => compounded_rate(compound, periods(frequency)?, t),
                Compounding::SimpleThenCompounded => {
                    let f = periods(frequency)?;
                    if t <= 1.0 / f {
                        (compound - 1.0) / t
                    } else {
                        compounded_rate(compound, f, t)
                    }
                }
                Compounding::CompoundedThenSimple => {
                    let f = periods(frequency)?;
                    if t <= 1.0 / f {
                        compounded_rate(compound, f, t)
                    } else {
                        (compound - 1.0) / t
                    }
                }
            }
        };
        Self::with_day_counter(rate, dc, compounding, frequency)
    }
}

fn compounded_rate(compound: Real, f: Real, t: Time) -> Real {
    (compound.powf(1.0 / (f * t)) - 1.0) * f
}

fn uses_frequency(compounding: Compounding) -> bool {
    !matches!(compounding, Compounding::Simple | Compounding::Continuous)
}

fn periods(frequency: Frequency) -> Result<Real> {
    frequency
        .periods_per_year()
        .map(Real::from)
        .ok_or_else(|| {
            Error::Configuration(format!("{frequency} frequency not allowed for compounded rates"))
        })
}

impl std::fmt::Display for InterestRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.4}% {} {:?}",
            self.rate * 100.0,
            self.dc.name(),
            self.compounding,
        )?;
        if uses_frequency(self.compounding) {
            write!(f, " {}", self.frequency)?;
        }
        Ok(())
    }
}
