use thiserror::Error;
use uom::si::{f64::Velocity, velocity::meter_per_second};

use tdoa_solvers::optimization::{bfgs, nelder_mead};

use crate::Bounds;

/// Speed of sound in air, in metres per second.
pub const SPEED_OF_SOUND: f64 = 343.0;

/// Errors that can occur when validating a [`LocatorConfig`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("propagation_speed must be finite and positive")]
    PropagationSpeed,

    #[error("{0} bounds must be finite with min < max on both axes")]
    Bounds(&'static str),

    #[error("acceptance bounds must enclose the operating bounds")]
    AcceptanceBounds,

    #[error("determinant_tol must be finite and non-negative")]
    DeterminantTol,

    #[error("boundary_margin must be finite and non-negative")]
    BoundaryMargin,

    #[error("boundary_weight must be finite and non-negative")]
    BoundaryWeight,

    #[error("regularization_weight must be finite and non-negative")]
    RegularizationWeight,
}

/// Settings for a [`Locator`](crate::Locator).
///
/// The defaults reproduce the reference deployment: a 1000×1000 plane with
/// outputs restricted to `[100, 900]²`, sound propagating at 343 m/s.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LocatorConfig {
    /// Propagation speed of the signal.
    pub propagation_speed: Velocity,

    /// Every reported position is clamped into this rectangle.
    pub operating: Bounds,

    /// Candidates outside this rectangle are rejected before clamping.
    pub acceptance: Bounds,

    pub linear: LinearConfig,

    pub nonlinear: NonlinearConfig,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            propagation_speed: Velocity::new::<meter_per_second>(SPEED_OF_SOUND),
            operating: Bounds::square(100.0, 900.0),
            acceptance: Bounds::square(50.0, 950.0),
            linear: LinearConfig::default(),
            nonlinear: NonlinearConfig::default(),
        }
    }
}

impl LocatorConfig {
    /// Checks every setting.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let speed = self.propagation_speed.get::<meter_per_second>();
        if !speed.is_finite() || speed <= 0.0 {
            return Err(ConfigError::PropagationSpeed);
        }
        if !self.operating.is_valid() {
            return Err(ConfigError::Bounds("operating"));
        }
        if !self.acceptance.is_valid() {
            return Err(ConfigError::Bounds("acceptance"));
        }
        if !self.acceptance.encloses(&self.operating) {
            return Err(ConfigError::AcceptanceBounds);
        }
        self.linear.validate()?;
        self.nonlinear.validate()
    }
}

/// Settings for the closed-form linear solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LinearConfig {
    /// Systems whose scaled determinant magnitude falls below this are
    /// treated as collinear.
    pub determinant_tol: f64,
}

impl Default for LinearConfig {
    fn default() -> Self {
        Self {
            determinant_tol: 1e-6,
        }
    }
}

impl LinearConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.determinant_tol.is_finite() || self.determinant_tol < 0.0 {
            return Err(ConfigError::DeterminantTol);
        }
        Ok(())
    }
}

/// Settings for the multi-start nonlinear solver.
///
/// The penalty weights were tuned for three towers on a 1000×1000 plane and
/// interact with the solvers' objective thresholds; re-check both together
/// when changing the plane or tower spacing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NonlinearConfig {
    /// Distance outside the operating edges where the boundary penalty starts.
    ///
    /// The penalty never touches the operating rectangle itself, so a source
    /// on its edge still has an exact zero-residual minimum.
    pub boundary_margin: f64,

    /// Weight of the quadratic boundary penalty.
    pub boundary_weight: f64,

    /// Weight of the pull toward the tower centroid.
    pub regularization_weight: f64,

    /// Broad search run from every seed.
    pub nelder_mead: nelder_mead::Config,

    /// Refinement run from every converged broad search.
    pub bfgs: bfgs::Config,
}

impl Default for NonlinearConfig {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self {
            boundary_margin: 20.0,
            boundary_weight: 0.05,
            regularization_weight: 1e-8,
            nelder_mead: nelder_mead::Config::new(1000, 100.0, 1e-8, 1e-9).unwrap(),
            bfgs: bfgs::Config::new(100, 1e-8, 1e-14).unwrap(),
        }
    }
}

impl NonlinearConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.boundary_margin.is_finite() || self.boundary_margin < 0.0 {
            return Err(ConfigError::BoundaryMargin);
        }
        if !self.boundary_weight.is_finite() || self.boundary_weight < 0.0 {
            return Err(ConfigError::BoundaryWeight);
        }
        if !self.regularization_weight.is_finite() || self.regularization_weight < 0.0 {
            return Err(ConfigError::RegularizationWeight);
        }
        Ok(())
    }
}
