//! Annealing configuration.

use crate::error::{Error, Result};

/// Cooling factor of the hyperbolic schedule `T_k = T_0 * 0.3 / k`.
pub const COOLING_FACTOR: f64 = 0.3;

/// Configuration for an [`Annealer`](super::Annealer) run.
///
/// # Examples
///
/// ```
/// use tsp_anneal::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(100.0)
///     .with_min_temperature(0.001)
///     .with_closed(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Initial temperature. Higher values accept more worsening moves early.
    pub initial_temperature: f64,

    /// The search stops once the temperature drops to or below this.
    pub min_temperature: f64,

    /// Whether the route returns to its starting point.
    pub closed: bool,

    /// Hard cap on the number of steps.
    pub max_steps: usize,

    /// Maximum number of permutations the exact search evaluates.
    pub brute_force_limit: usize,

    /// Exact search runs only when the base has fewer points than this.
    /// 0 disables it.
    pub brute_force_threshold: usize,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 10.0,
            min_temperature: 0.00003,
            closed: false,
            max_steps: 100_000,
            brute_force_limit: 500_000,
            brute_force_threshold: 10,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    pub fn with_max_steps(mut self, n: usize) -> Self {
        self.max_steps = n;
        self
    }

    pub fn with_brute_force_limit(mut self, n: usize) -> Self {
        self.brute_force_limit = n;
        self
    }

    pub fn with_brute_force_threshold(mut self, n: usize) -> Self {
        self.brute_force_threshold = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(Error::invalid_config(format!(
                "initial_temperature must be positive and finite, got {}",
                self.initial_temperature
            )));
        }
        if self.min_temperature.is_nan() || self.min_temperature < 0.0 {
            return Err(Error::invalid_config(format!(
                "min_temperature must be non-negative, got {}",
                self.min_temperature
            )));
        }
        if self.min_temperature >= self.initial_temperature {
            return Err(Error::invalid_config(
                "min_temperature must be less than initial_temperature",
            ));
        }
        if self.max_steps == 0 {
            return Err(Error::invalid_config("max_steps must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnnealConfig::default();
        assert!((config.initial_temperature - 10.0).abs() < 1e-10);
        assert!((config.min_temperature - 0.00003).abs() < 1e-15);
        assert!(!config.closed);
        assert_eq!(config.max_steps, 100_000);
        assert_eq!(config.brute_force_limit, 500_000);
        assert_eq!(config.brute_force_threshold, 10);
    }

    #[test]
    fn test_validate_ok() {
        assert!(AnnealConfig::default().validate().is_ok());
        assert!(AnnealConfig::default()
            .with_min_temperature(0.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        let config = AnnealConfig::default().with_initial_temperature(-1.0);
        assert!(config.validate().is_err());
        let config = AnnealConfig::default().with_initial_temperature(f64::INFINITY);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_negative_min() {
        let config = AnnealConfig::default().with_min_temperature(-0.1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_min_ge_initial() {
        let config = AnnealConfig::default()
            .with_initial_temperature(10.0)
            .with_min_temperature(20.0);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_zero_steps() {
        let config = AnnealConfig::default().with_max_steps(0);
        assert!(config.validate().is_err());
    }
}
