use thiserror::Error;

/// Configuration for the BFGS solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawConfig", into = "RawConfig"))]
pub struct Config {
    max_iters: usize,
    objective_threshold: f64,
    gradient_tol: f64,
}

/// Errors that can occur when validating a BFGS solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("objective_threshold must be finite")]
    ObjectiveThreshold,

    #[error("gradient_tol must be finite and non-negative")]
    GradientTol,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(200, 1e-12, 1e-12).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold is not finite or the gradient
    /// tolerance is negative or non-finite.
    pub fn new(
        max_iters: usize,
        objective_threshold: f64,
        gradient_tol: f64,
    ) -> Result<Self, ConfigError> {
        if !objective_threshold.is_finite() {
            return Err(ConfigError::ObjectiveThreshold);
        }
        if !gradient_tol.is_finite() || gradient_tol < 0.0 {
            return Err(ConfigError::GradientTol);
        }

        Ok(Self {
            max_iters,
            objective_threshold,
            gradient_tol,
        })
    }

    /// Returns the maximum number of accepted steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the objective value below which the search has converged.
    #[must_use]
    pub fn objective_threshold(&self) -> f64 {
        self.objective_threshold
    }

    /// Returns the gradient norm at which the search stops stepping.
    #[must_use]
    pub fn gradient_tol(&self) -> f64 {
        self.gradient_tol
    }
}

/// Unvalidated field layout used for (de)serialization.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct RawConfig {
    max_iters: usize,
    objective_threshold: f64,
    gradient_tol: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Self::new(raw.max_iters, raw.objective_threshold, raw.gradient_tol)
    }
}

#[cfg(feature = "serde")]
impl From<Config> for RawConfig {
    fn from(config: Config) -> Self {
        Self {
            max_iters: config.max_iters,
            objective_threshold: config.objective_threshold,
            gradient_tol: config.gradient_tol,
        }
    }
}
