//! BFGS quasi-Newton search for smooth multi-variable optimization.
//!
//! # Algorithm
//!
//! BFGS keeps an estimate of the inverse Hessian, steps along the
//! quasi-Newton direction `-H·g`, and updates `H` from the change in gradient
//! across each accepted step. Steps are accepted by a backtracking line search
//! enforcing the Armijo sufficient-decrease condition.
//!
//! The first step has unit length in `x`; after it, the inverse Hessian is
//! rescaled from the observed curvature before the first BFGS update.
//!
//! # When to Use
//!
//! BFGS is appropriate when:
//! - An analytic gradient is available (see [`Gradient`])
//! - The starting point is already near a minimum, for example the result of
//!   a [`nelder_mead`](super::nelder_mead) search
//!
//! # Convergence
//!
//! The objective threshold is checked after every accepted step, so the solver
//! always tries at least one step unless the starting gradient is already
//! below [`Config::gradient_tol`].
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per accepted step. Observers can return
//! [`Action::StopEarly`] to halt and return the current point.

mod action;
mod config;
mod event;
mod hessian;
mod line_search;
mod search;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use event::Event;

use tdoa_core::{Gradient, Observer};

use super::{Error, Solution};

/// Finds a minimum of the objective using BFGS.
///
/// # Errors
///
/// Returns an error if `x0` is not finite or the objective fails.
pub fn minimize<F, Obs, const N: usize>(
    objective: &F,
    x0: [f64; N],
    config: &Config,
    observer: Obs,
) -> Result<Solution<N>, Error>
where
    F: Gradient<N>,
    Obs: Observer<Event<N>, Action>,
{
    search::search(objective, x0, config, observer)
}

/// Finds a minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if `x0` is not finite or the objective fails.
pub fn minimize_unobserved<F, const N: usize>(
    objective: &F,
    x0: [f64; N],
    config: &Config,
) -> Result<Solution<N>, Error>
where
    F: Gradient<N>,
{
    minimize(objective, x0, config, ())
}
