use thiserror::Error;

/// Configuration for the Nelder-Mead solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawConfig", into = "RawConfig"))]
pub struct Config {
    max_iters: usize,
    initial_step: f64,
    objective_threshold: f64,
    x_abs_tol: f64,
}

/// Errors that can occur when validating a Nelder-Mead solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("initial_step must be finite and positive")]
    InitialStep,

    #[error("objective_threshold must be finite")]
    ObjectiveThreshold,

    #[error("x_abs_tol must be finite and non-negative")]
    XAbs,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(500, 1.0, 1e-12, 1e-12).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the step is not positive, the threshold is not
    /// finite, or the tolerance is negative or non-finite.
    pub fn new(
        max_iters: usize,
        initial_step: f64,
        objective_threshold: f64,
        x_abs_tol: f64,
    ) -> Result<Self, ConfigError> {
        if !initial_step.is_finite() || initial_step <= 0.0 {
            return Err(ConfigError::InitialStep);
        }
        if !objective_threshold.is_finite() {
            return Err(ConfigError::ObjectiveThreshold);
        }
        if !x_abs_tol.is_finite() || x_abs_tol < 0.0 {
            return Err(ConfigError::XAbs);
        }

        Ok(Self {
            max_iters,
            initial_step,
            objective_threshold,
            x_abs_tol,
        })
    }

    /// Returns the maximum number of simplex iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the edge length of the initial simplex.
    #[must_use]
    pub fn initial_step(&self) -> f64 {
        self.initial_step
    }

    /// Returns the objective value below which the search has converged.
    #[must_use]
    pub fn objective_threshold(&self) -> f64 {
        self.objective_threshold
    }

    /// Returns the simplex size at which the search is considered stalled.
    #[must_use]
    pub fn x_abs_tol(&self) -> f64 {
        self.x_abs_tol
    }
}

/// Unvalidated field layout used for (de)serialization.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct RawConfig {
    max_iters: usize,
    initial_step: f64,
    objective_threshold: f64,
    x_abs_tol: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Self::new(
            raw.max_iters,
            raw.initial_step,
            raw.objective_threshold,
            raw.x_abs_tol,
        )
    }
}

#[cfg(feature = "serde")]
impl From<Config> for RawConfig {
    fn from(config: Config) -> Self {
        Self {
            max_iters: config.max_iters,
            initial_step: config.initial_step,
            objective_threshold: config.objective_threshold,
            x_abs_tol: config.x_abs_tol,
        }
    }
}
