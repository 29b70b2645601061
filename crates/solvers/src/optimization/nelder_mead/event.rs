use crate::optimization::Point;

/// The kind of simplex update applied in one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Reflect,
    Expand,
    ContractOutside,
    ContractInside,
    Shrink,
}

/// Event emitted by the Nelder-Mead solver after each iteration.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a, const N: usize> {
    /// One-based iteration number.
    pub iter: usize,

    /// The update applied in this iteration.
    pub step: Step,

    /// The best vertex after the update.
    pub best: Point<N>,

    /// All vertices after the update, in no particular order.
    pub simplex: &'a [Point<N>],
}
