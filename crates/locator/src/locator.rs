use tracing::{debug, warn};

use crate::{
    Candidate, ConfigError, Detection, LocateError, LocatorConfig, Method, TdoaProblem,
    TowerMeasurement, linear, nonlinear, validate::validate,
};

/// Locates signal sources from tower arrival times.
///
/// A `Locator` holds only validated configuration, so one instance can serve
/// any number of concurrent requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Locator {
    config: LocatorConfig,
}

impl Locator {
    /// Creates a locator after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first invalid setting.
    pub fn new(config: LocatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    /// Estimates where the signal heard by `measurements` came from.
    ///
    /// Tries the nonlinear solver first and falls back to the linear solver.
    /// Failures never escape: when nothing works the result is
    /// [`Detection::Unsolved`], and each failure is reported through
    /// `tracing`.
    #[must_use]
    pub fn locate(&self, measurements: &[TowerMeasurement]) -> Detection {
        let problem =
            match TdoaProblem::from_measurements(measurements, self.config.propagation_speed) {
                Ok(problem) => problem,
                Err(reason) => {
                    warn!(%reason, "rejected measurements");
                    return Detection::Unsolved { reason };
                }
            };

        match self.solve(&problem) {
            Ok(candidate) => {
                debug!(
                    method = %candidate.method,
                    x = candidate.position.x,
                    y = candidate.position.y,
                    residual = candidate.residual,
                    "located source"
                );
                Detection::Solved {
                    position: candidate.position,
                    timestamp: problem.reference_ms(),
                    method: candidate.method,
                    residual: candidate.residual,
                }
            }
            Err(reason) => Detection::Unsolved { reason },
        }
    }

    /// Runs the solver cascade on a canonical problem.
    ///
    /// # Errors
    ///
    /// Returns the linear solver's failure when both solvers fail.
    pub fn solve(&self, problem: &TdoaProblem) -> Result<Candidate, LocateError> {
        let config = &self.config;
        let linear = linear::solve(problem, &config.linear, &config.operating);
        let seed = linear.as_ref().ok().map(|estimate| estimate.position);

        let nonlinear_error = match nonlinear::solve(
            problem,
            seed,
            &config.nonlinear,
            &config.operating,
            &config.acceptance,
        ) {
            Ok(candidate) => return Ok(candidate),
            Err(error) => error,
        };
        debug!(error = %nonlinear_error, "nonlinear solver failed, falling back to linear");

        let fallback = linear.and_then(|estimate| {
            let position = validate(estimate.position, &config.acceptance)?;
            Ok(Candidate {
                position,
                residual: estimate.residual,
                method: Method::Linear,
            })
        });

        fallback.inspect_err(|linear_error| {
            warn!(
                nonlinear = %nonlinear_error,
                linear = %linear_error,
                "no solver produced a detection"
            );
        })
    }
}
