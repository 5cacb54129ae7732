//! Bootstrap accuracy and iteration settings.

use yc_core::errors::Result;
use yc_core::{ensure, Real};

/// Settings for a [`PiecewiseYieldCurve`](crate::PiecewiseYieldCurve)
/// bootstrap.
///
/// # Example
/// ```
/// use yc_termstructures::BootstrapConfig;
///
/// let config = BootstrapConfig::default()
///     .with_accuracy(1e-10)
///     .with_negative_rates(false);
/// assert_eq!(config.max_iterations, 25);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BootstrapConfig {
    /// Solver accuracy per node; the outer loop stops once the summed node
    /// change is below `accuracy × nodes`.
    pub accuracy: Real,
    /// Cap on outer passes over the nodes.
    pub max_iterations: usize,
    /// Widen the solver bounds to admit negative rates.
    pub allow_negative_rates: bool,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            accuracy: 1.0e-12,
            max_iterations: 25,
            allow_negative_rates: true,
        }
    }
}

impl BootstrapConfig {
    /// Set the accuracy.
    pub fn with_accuracy(mut self, accuracy: Real) -> Self {
        self.accuracy = accuracy;
        self
    }

    /// Set the outer-iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Allow or forbid negative rates.
    pub fn with_negative_rates(mut self, allow: bool) -> Self {
        self.allow_negative_rates = allow;
        self
    }

    /// Check that the settings can drive a bootstrap.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.accuracy > 0.0 && self.accuracy.is_finite(),
            "accuracy ({}) must be positive",
            self.accuracy
        );
        ensure!(self.max_iterations >= 1, "at least one iteration required");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = BootstrapConfig::default();
        assert_eq!(config.accuracy, 1e-12);
        assert_eq!(config.max_iterations, 25);
        assert!(config.allow_negative_rates);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn invalid_settings() {
        for config in [
            BootstrapConfig::default().with_accuracy(0.0),
            BootstrapConfig::default().with_accuracy(-1e-8),
            BootstrapConfig::default().with_accuracy(f64::NAN),
            BootstrapConfig::default().with_max_iterations(0),
        ] {
            assert!(config.validate().unwrap_err().is_configuration(), "{config:?}");
        }
    }
}
