use super::Point;

/// Indicates why a local search finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The objective dropped below the configured threshold.
    Converged,

    /// The search could not make further progress above the threshold.
    Stalled,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a local search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution<const N: usize> {
    /// Final solver status.
    pub status: Status,

    /// Best location found.
    pub x: [f64; N],

    /// Objective value at `x`.
    pub objective: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl<const N: usize> Solution<N> {
    pub(crate) fn new(point: Point<N>, status: Status, iters: usize) -> Self {
        Self {
            status,
            x: point.x,
            objective: point.objective,
            iters,
        }
    }

    /// Returns true if the search reached the objective threshold.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
