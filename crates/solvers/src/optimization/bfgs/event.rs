use crate::optimization::Point;

/// Event emitted by the BFGS solver after each accepted step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event<const N: usize> {
    /// One-based iteration number.
    pub iter: usize,

    /// The point reached by this step.
    pub point: Point<N>,

    /// Euclidean norm of the gradient at `point`.
    pub gradient_norm: f64,

    /// Length of the step taken in `x`.
    pub step_length: f64,
}
