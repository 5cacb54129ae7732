//! Compounding conventions.

/// How interest accrues over a period of length `t` at rate `r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compounding {
    /// `1 + r·t`
    Simple,
    /// `(1 + r/f)^(f·t)`
    Compounded,
    /// `e^(r·t)`
    Continuous,
    /// Simple up to the first compounding period, compounded thereafter.
    SimpleThenCompounded,
    /// Compounded up to the first compounding period, simple thereafter.
    CompoundedThenSimple,
}
