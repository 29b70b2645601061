//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasObjective`]: events that carry an objective value
//! - [`HasIteration`]: events that carry an iteration number
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use tdoa_core::Observer;
//! use tdoa_observers::traits::{CanStopEarly, HasObjective};
//!
//! struct GoodEnough {
//!     target: f64,
//! }
//!
//! impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.objective() < self.target).then(A::stop_early)
//!     }
//! }
//! ```

use tdoa_solvers::optimization::{bfgs, nelder_mead};

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    fn objective(&self) -> f64;
}

/// An event that carries a one-based iteration number.
pub trait HasIteration {
    /// Returns the iteration that produced this event.
    fn iteration(&self) -> usize;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- nelder_mead ---

impl<const N: usize> HasObjective for nelder_mead::Event<'_, N> {
    fn objective(&self) -> f64 {
        self.best.objective
    }
}

impl<const N: usize> HasIteration for nelder_mead::Event<'_, N> {
    fn iteration(&self) -> usize {
        self.iter
    }
}

impl CanStopEarly for nelder_mead::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

// --- bfgs ---

impl<const N: usize> HasObjective for bfgs::Event<N> {
    fn objective(&self) -> f64 {
        self.point.objective
    }
}

impl<const N: usize> HasIteration for bfgs::Event<N> {
    fn iteration(&self) -> usize {
        self.iter
    }
}

impl CanStopEarly for bfgs::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use tdoa_core::{Gradient, Objective, Observer};
    use tdoa_solvers::optimization::Status;

    struct Bowl;

    impl Objective<2> for Bowl {
        type Error = Infallible;

        fn value(&self, x: &[f64; 2]) -> Result<f64, Self::Error> {
            Ok(x[0].powi(2) + x[1].powi(2))
        }
    }

    impl Gradient<2> for Bowl {
        fn gradient(&self, x: &[f64; 2]) -> Result<[f64; 2], Self::Error> {
            Ok([2.0 * x[0], 2.0 * x[1]])
        }
    }

    /// Stops once the objective drops below `target`, for any solver.
    struct StopBelow {
        target: f64,
        last_iter: usize,
    }

    impl<E: HasObjective + HasIteration, A: CanStopEarly> Observer<E, A> for StopBelow {
        fn observe(&mut self, event: &E) -> Option<A> {
            assert_eq!(event.iteration(), self.last_iter + 1);
            self.last_iter = event.iteration();
            (event.objective() < self.target).then(A::stop_early)
        }
    }

    #[test]
    fn generic_observer_stops_nelder_mead() {
        let observer = StopBelow {
            target: 1.0,
            last_iter: 0,
        };
        let solution =
            nelder_mead::minimize(&Bowl, [5.0, 5.0], &nelder_mead::Config::default(), observer)
                .unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert!(solution.objective < 1.0);
    }

    #[test]
    fn generic_observer_stops_bfgs() {
        let observer = StopBelow {
            target: 1.0,
            last_iter: 0,
        };
        let solution =
            bfgs::minimize(&Bowl, [5.0, 5.0], &bfgs::Config::default(), observer).unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert!(solution.objective < 1.0);
    }
}
