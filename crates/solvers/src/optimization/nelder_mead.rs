//! Nelder-Mead simplex search for multi-variable optimization.
//!
//! # Algorithm
//!
//! Nelder-Mead keeps `N + 1` points (a simplex) and repeatedly replaces the
//! worst one by reflecting it through the centroid of the others. Depending on
//! how the reflected point compares, the step is expanded, contracted, or the
//! whole simplex shrinks toward its best vertex.
//!
//! # When to Use
//!
//! Nelder-Mead is appropriate when:
//! - The starting point may be far from the minimum
//! - Derivative information is unavailable or unreliable
//! - The problem has only a handful of variables
//!
//! # Limitations
//!
//! - **Local only**: converges to the minimum nearest the starting simplex
//! - **Slow tail**: convergence near the minimum is linear at best; refine with
//!   a gradient-based method such as [`bfgs`](super::bfgs) when precision matters
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after the step is applied.
//! Observers can return [`Action::StopEarly`] to halt and return the best
//! vertex found so far.

mod action;
mod config;
mod event;
mod search;
mod simplex;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use event::{Event, Step};

use tdoa_core::{Objective, Observer};

use super::{Error, Solution};

/// Finds a minimum of the objective using Nelder-Mead simplex search.
///
/// The initial simplex is `x0` plus one vertex offset by
/// [`Config::initial_step`] along each axis.
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
    F: Objective<N>,
    Obs: for<'a> Observer<Event<'a, N>, Action>,
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
    F: Objective<N>,
{
    minimize(objective, x0, config, ())
}
