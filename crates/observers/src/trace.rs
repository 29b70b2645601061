use tdoa_core::Observer;
use tracing::trace;

use crate::traits::{HasIteration, HasObjective};

/// Reports every solver iteration as a `trace`-level `tracing` event.
///
/// The observer never steers the solver; it always returns `None`.
/// Each event carries the solver name, a caller-chosen `run` index (for
/// example, which seed of a multi-start search), the iteration number, and
/// the objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceObserver {
    solver: &'static str,
    run: usize,
}

impl TraceObserver {
    /// Creates an observer that labels its events with `solver` and `run`.
    #[must_use]
    pub fn new(solver: &'static str, run: usize) -> Self {
        Self { solver, run }
    }
}

impl<E: HasObjective + HasIteration, A> Observer<E, A> for TraceObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        trace!(
            solver = self.solver,
            run = self.run,
            iter = event.iteration(),
            objective = event.objective(),
            "solver iteration"
        );
        None
    }
}
