use tdoa_core::Gradient;

use crate::optimization::{Error, evaluate::sanitize, vector};

/// Armijo sufficient-decrease constant.
const ARMIJO: f64 = 1e-4;

/// Step-length reduction per backtrack.
const BACKTRACK: f64 = 0.5;

/// Backtracks before the line search gives up.
const MAX_BACKTRACKS: usize = 60;

/// An accepted line search step.
pub(super) struct Accepted<const N: usize> {
    pub(super) x: [f64; N],
    pub(super) value: f64,
    pub(super) alpha: f64,
}

/// Backtracks from `alpha` along `direction` until the Armijo condition holds.
///
/// `slope` is the directional derivative `g·d` at `x` and must be negative.
/// Returns `None` if no acceptable step is found.
pub(super) fn backtrack<F, const N: usize>(
    objective: &F,
    x: &[f64; N],
    value: f64,
    direction: &[f64; N],
    slope: f64,
    mut alpha: f64,
) -> Result<Option<Accepted<N>>, Error>
where
    F: Gradient<N>,
{
    for _ in 0..MAX_BACKTRACKS {
        let candidate = vector::add_scaled(x, alpha, direction);
        let candidate_value = sanitize(
            objective
                .value(&candidate)
                .map_err(|error| Error::Objective(Box::new(error)))?,
        );

        if candidate_value <= value + ARMIJO * alpha * slope && candidate != *x {
            return Ok(Some(Accepted {
                x: candidate,
                value: candidate_value,
                alpha,
            }));
        }
        alpha *= BACKTRACK;
    }

    Ok(None)
}
