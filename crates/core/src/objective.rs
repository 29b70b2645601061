/// A scalar function of `N` solver variables that solvers try to minimize.
///
/// The const generic `N` is the number of solver variables.
/// For example, `N = 2` represents a search over a plane.
///
/// Objectives must be deterministic, always producing the same value for a
/// given `x`, so that repeated solves of the same problem agree exactly.
pub trait Objective<const N: usize> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Computes the objective value at `x`.
    ///
    /// A non-finite value is a valid answer: solvers treat it as worse than
    /// any finite value.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective cannot be computed at `x`.
    fn value(&self, x: &[f64; N]) -> Result<f64, Self::Error>;
}

/// An [`Objective`] with an analytic gradient.
///
/// Gradient-based solvers require this trait; derivative-free solvers only
/// need [`Objective`].
pub trait Gradient<const N: usize>: Objective<N> {
    /// Computes the gradient of the objective at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Objective::Error`] if the gradient cannot be computed at `x`.
    fn gradient(&self, x: &[f64; N]) -> Result<[f64; N], Self::Error>;

    /// Computes the objective value and gradient together.
    ///
    /// Implementors can override this when both share intermediate results.
    ///
    /// # Errors
    ///
    /// Returns [`Objective::Error`] if either computation fails.
    fn value_and_gradient(&self, x: &[f64; N]) -> Result<(f64, [f64; N]), Self::Error> {
        Ok((self.value(x)?, self.gradient(x)?))
    }
}
